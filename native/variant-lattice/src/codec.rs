//! The boundary to persisted textual automata.
//!
//! The format belongs to the collaborator implementing [`SpecCodec`]; this
//! crate only produces and consumes the decoded [`Automaton`] values.

use crate::automaton::{Automaton, Symbol};

pub trait SpecCodec<S: Symbol> {
    type Error;

    fn encode(&self, automaton: &Automaton<S>) -> String;

    fn decode(&self, text: &str) -> Result<Automaton<S>, Self::Error>;
}
