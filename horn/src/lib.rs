//! # Horn Engine
//!
//! **Propositional rule inference, both directions**
//!
//! Horn is a minimal inference engine over ground propositional atoms:
//! given known facts and "IF premises THEN conclusion" rules it either
//! saturates the fact set by forward chaining or proves a single goal
//! by backward chaining, producing a human-readable trace of every
//! reasoning step.
//!
//! ## Quick Start
//!
//! ```rust
//! use horn::{backward, forward, Atom, FactSet, Rule};
//!
//! let rules = vec![
//!     Rule::new(vec![Atom::from("A")], Atom::from("B")),
//!     Rule::new(vec![Atom::from("B")], Atom::from("C")),
//! ];
//! let facts: FactSet = [Atom::from("A")].into_iter().collect();
//!
//! let inference = forward::infer(&facts, &rules);
//! assert!(inference.derived.contains(&Atom::from("C")));
//!
//! let proof = backward::prove(&Atom::from("C"), &facts, &rules);
//! assert!(proof.proved);
//! ```
//!
//! ## Core Concepts
//!
//! ### Atoms
//! Plain string labels with exact-match equality. No negation, no
//! variables, no unification.
//!
//! ### Rules
//! A conjunction of premise atoms implying one conclusion atom. List
//! order is evaluation priority.
//!
//! ### Forward chaining
//! Data-driven fixed-point saturation: derive everything reachable from
//! the known facts.
//!
//! ### Backward chaining
//! Goal-driven depth-first proof search that tries only the first rule
//! concluding each goal, with a cycle guard instead of unbounded
//! recursion.
//!
//! Both engines are stateless, synchronous and free of process-wide
//! state; [`Engine`] is the optional host wrapper that owns a
//! [`KnowledgeBase`] and layers editing and import/export on top.

pub mod backward;
pub mod engine;
pub mod error;
pub mod forward;
pub mod knowledge;
pub mod serializers;
pub mod trace;

pub use backward::{prove, prove_into, Proof};
pub use engine::Engine;
pub use error::HornError;
pub use forward::{infer, Inference};
pub use knowledge::{Atom, FactSet, KnowledgeBase, Rule};
pub use trace::TraceStep;

/// Result type for Horn operations
pub type HornResult<T> = Result<T, HornError>;
