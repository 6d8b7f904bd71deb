mod split_criterion_choice;

pub use split_criterion_choice::{
    InfoGainParams, NoParams, SplitCriterionChoice, SplitCriterionKind,
};
