//! Deliberately defective containers for testing the harness itself.
//!
//! `FlawedFactory<D>` builds a `Vec`-backed sequence whose behavior deviates
//! from the contract in the way `D` describes. Each defect must be caught by
//! the checks for exactly the operation it breaks.

use std::marker::PhantomData;
use std::slice;

use trav_core::{SeqFactory, TraversableOnce};

/// Describes how a [`Flawed`] container deviates from the contract.
pub trait DefectSpec: 'static {
    const NAME: &'static str;
    /// `exists_unique` answers like `exists`.
    const DUPLICATE_BLIND: bool = false;
    /// `exists` and `for_all` examine every element.
    const NO_SHORT_CIRCUIT: bool = false;
    /// The factory publishes the first element as peek's last observed.
    const MISREPORTS_PEEK: bool = false;
    /// `of_all` stores elements back to front.
    const REVERSED: bool = false;
    /// `peek` observes every element but drops the last from its result.
    const TRUNCATES_PEEK: bool = false;
}

#[allow(dead_code, reason = "type-level markers")]
mod markers {
    pub struct Sound;
    pub struct DuplicateBlind;
    pub struct NoShortCircuit;
    pub struct MisreportedPeek;
    pub struct Reversed;
    pub struct TruncatedPeek;
}

pub use markers::{
    DuplicateBlind, MisreportedPeek, NoShortCircuit, Reversed, Sound, TruncatedPeek,
};

impl DefectSpec for Sound {
    const NAME: &'static str = "Flawed<Sound>";
}

impl DefectSpec for DuplicateBlind {
    const NAME: &'static str = "Flawed<DuplicateBlind>";
    const DUPLICATE_BLIND: bool = true;
}

impl DefectSpec for NoShortCircuit {
    const NAME: &'static str = "Flawed<NoShortCircuit>";
    const NO_SHORT_CIRCUIT: bool = true;
}

impl DefectSpec for MisreportedPeek {
    const NAME: &'static str = "Flawed<MisreportedPeek>";
    const MISREPORTS_PEEK: bool = true;
}

impl DefectSpec for Reversed {
    const NAME: &'static str = "Flawed<Reversed>";
    const REVERSED: bool = true;
}

impl DefectSpec for TruncatedPeek {
    const NAME: &'static str = "Flawed<TruncatedPeek>";
    const TRUNCATES_PEEK: bool = true;
}

pub struct Flawed<T, D> {
    items: Vec<T>,
    defect: PhantomData<fn() -> D>,
}

impl<T, D: DefectSpec> Flawed<T, D> {
    pub fn new(items: Vec<T>) -> Self {
        Flawed {
            items,
            defect: PhantomData,
        }
    }
}

impl<T: Clone, D> Clone for Flawed<T, D> {
    fn clone(&self) -> Self {
        Flawed {
            items: self.items.clone(),
            defect: PhantomData,
        }
    }
}

impl<T: Clone, D: DefectSpec> TraversableOnce<T> for Flawed<T, D> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    fn exists<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> bool {
        if D::NO_SHORT_CIRCUIT {
            self.items
                .iter()
                .fold(false, |found, element| predicate(element) || found)
        } else {
            self.items.iter().any(predicate)
        }
    }

    fn exists_unique<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> bool {
        let mut matches = self.items.iter().filter(|&element| predicate(element));
        if D::DUPLICATE_BLIND {
            matches.next().is_some()
        } else {
            matches.next().is_some() && matches.next().is_none()
        }
    }

    fn for_all<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> bool {
        if D::NO_SHORT_CIRCUIT {
            self.items
                .iter()
                .fold(true, |holds, element| predicate(element) && holds)
        } else {
            self.items.iter().all(predicate)
        }
    }

    fn peek<F>(&self, action: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.items.iter().for_each(action);
        let mut peeked = self.clone();
        if D::TRUNCATES_PEEK {
            peeked.items.pop();
        }
        peeked
    }
}

#[allow(dead_code, reason = "type-level marker")]
pub struct FlawedFactory<D>(PhantomData<fn() -> D>);

impl<D: DefectSpec> SeqFactory for FlawedFactory<D> {
    const NAME: &'static str = D::NAME;

    type Seq<T: Clone + 'static> = Flawed<T, D>;

    fn empty<T: Clone + 'static>() -> Flawed<T, D> {
        Flawed::new(Vec::new())
    }

    fn of_all<T, I>(elements: I) -> Flawed<T, D>
    where
        T: Clone + 'static,
        I: IntoIterator<Item = T>,
    {
        let mut items: Vec<T> = elements.into_iter().collect();
        if D::REVERSED {
            items.reverse();
        }
        Flawed::new(items)
    }

    fn peek_last_observed<T: Clone>(elements: &[T]) -> Option<T> {
        if D::MISREPORTS_PEEK {
            elements.first().cloned()
        } else {
            elements.last().cloned()
        }
    }
}
