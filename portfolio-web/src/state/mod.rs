//! Application state management

pub mod machine;
pub mod portfolio;
pub mod slider;

pub use machine::{Direction, SliderMachine, Transition};
pub use portfolio::{
    merge_skills, provide_portfolio_context, top_skills, use_portfolio_context, PortfolioContext,
    SkillEntry,
};
pub use slider::{provide_slider_context, use_slider_context, SliderContext};
