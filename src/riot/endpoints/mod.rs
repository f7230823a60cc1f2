mod account;
mod match_v5;
mod summoner;

use super::client::RiotClient;
use super::traits::LookupApi;

impl LookupApi for RiotClient {}
