pub mod policy;

pub use policy::{
    BetAction, HeuristicPolicy, Policy, PolicyContext, TableAction, WIN_WEIGHTS, respond,
};
