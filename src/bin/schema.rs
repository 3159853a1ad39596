use cosmwasm_schema::write_api;

use staking_rewards::msg::{ ExecuteMsg, InstantiateMsg, QueryMsg };

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
    }
}
