mod calc_vm;
mod quiz_vm;
mod tutorial_vm;

pub use calc_vm::{CircleCalcVm, map_calculator};
pub use quiz_vm::{OptionState, OptionVm, QuestionVm, ResultsVm, map_question, map_results};
pub use tutorial_vm::{
    MarkerState, SectionCardVm, SectionNavVm, map_progress, map_section_nav,
};
