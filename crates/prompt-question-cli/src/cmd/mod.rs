pub mod answer;
pub mod choices;
pub mod normalize;
