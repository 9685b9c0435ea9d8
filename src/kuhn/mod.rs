//! N-card Kuhn poker.
//!
//! Two players each ante, receive one private card from a deck of `N`
//! ranked cards, and play a single betting round with one bet size.
//! The reference game every bundled solver is benchmarked on.

mod card;
mod edge;
mod history;
mod info;
mod rules;

pub use card::*;
pub use edge::*;
pub use history::*;
pub use info::*;
pub use rules::*;
