use anyhow::Result;

/// Object-safe trait for anything that can answer commands for a language tag.
///
/// The [`Interpreter`](crate::Interpreter) keeps a list of dispatchers and
/// forwards each line to the one whose [`tag`](Dispatcher::tag) matches the
/// line's first word.
pub trait Dispatcher {
    /// Language tag this dispatcher answers to, e.g. `.physics`.
    fn tag(&self) -> &str;

    /// Turn a command string (the line with its tag stripped) into output.
    ///
    /// Malformed commands are not errors: they produce a usage hint as a
    /// normal `Ok` value. `Err` is reserved for faults the interactive loop
    /// should report and then carry on from.
    fn dispatch(&self, code: &str) -> Result<String>;
}
