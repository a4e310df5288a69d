//! Placeholder assistant response generation
//!
//! `KeywordResponder` implements the `ResponseGenerator` contract with a
//! fixed rule table: topical keywords in priority order, a follow-up rule
//! for longer conversations, and a pool of generic acknowledgements. It
//! stands in for a real generation backend behind the same trait.

pub mod keyword;
mod templates;

pub use keyword::KeywordResponder;
