//! UI building blocks shared by the slide panels and the deck chrome

pub mod components;
pub mod counter;
pub mod motion;
