use std::fmt;

use crate::format;
use crate::think_time::ThinkTime;
use crate::transaction::Transaction;

/// Probability given to a session when none is specified.
pub const DEFAULT_SESSION_PROBABILITY: u8 = 100;

/// A step of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action<'a> {
    Transaction(&'a Transaction),
    ThinkTime(&'a ThinkTime),
}

impl fmt::Display for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Transaction(transaction) => fmt::Display::fmt(transaction, f),
            Action::ThinkTime(think_time) => fmt::Display::fmt(think_time, f),
        }
    }
}

/// Position of an action in the storage of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Transaction(usize),
    ThinkTime(usize),
}

/// A weighted user profile: the sequence of actions a simulated user performs.
///
/// The probabilities of all sessions in a document are expected to add up to 100, but that is
/// left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    name: String,
    probability: u8,
    transactions: Vec<Transaction>,
    think_times: Vec<ThinkTime>,
    order: Vec<Slot>,
}

impl Session {
    pub(crate) fn new(name: &str, probability: Option<u8>) -> Self {
        Self {
            name: name.to_string(),
            probability: probability.unwrap_or(DEFAULT_SESSION_PROBABILITY),
            transactions: Vec::new(),
            think_times: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Append a new transaction and return it so that requests can be attached.
    pub fn add_transaction(&mut self, name: &str) -> &mut Transaction {
        self.transactions.push(Transaction::new(name));
        let index = self.transactions.len() - 1;
        self.order.push(Slot::Transaction(index));
        &mut self.transactions[index]
    }

    /// Pause for `seconds` before the next action.
    ///
    /// With `random` left as `None` the pause is randomised around a mean of `seconds`.
    pub fn add_think_time(&mut self, seconds: f64, random: Option<bool>) -> &mut Self {
        self.think_times.push(ThinkTime::new(seconds, random));
        self.order
            .push(Slot::ThinkTime(self.think_times.len() - 1));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn probability(&self) -> u8 {
        self.probability
    }

    /// Transactions and think times, in the order they were added.
    pub fn actions(&self) -> impl Iterator<Item = Action<'_>> + '_ {
        self.order.iter().map(|slot| match *slot {
            Slot::Transaction(index) => Action::Transaction(&self.transactions[index]),
            Slot::ThinkTime(index) => Action::ThinkTime(&self.think_times[index]),
        })
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<session name="{}" probability="{}" type="ts_http">"#,
            format::attr(&self.name),
            self.probability
        )?;
        for action in self.actions() {
            write!(f, "{action}")?;
        }
        f.write_str("</session>")
    }
}
