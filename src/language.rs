use crate::command::Dispatcher;
use crate::condition::eval_condition;
use crate::parser::{self, Command, Kind};
use anyhow::{Context, Result, bail};
use regex::{Regex, RegexBuilder};

/// Usage hint for a malformed `if`, shared by every language.
pub const IF_USAGE: &str = "Usage: if <cond> then <yes> else <no>";

/// Usage hint for a malformed `loop`, shared by every language.
pub const LOOP_USAGE: &str = "Usage: loop <n> <action>";

/// Upper bound on `loop` repetitions. Larger counts are reported as faults.
pub const MAX_LOOP_REPEATS: i64 = 1_000_000;

/// Everything that sets one language apart from another.
///
/// Decorations are prepended verbatim to the command's text, so they carry
/// their own trailing space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub tag: &'static str,
    /// Answer to an empty command.
    pub empty: &'static str,
    pub print: &'static str,
    pub if_yes: &'static str,
    pub if_no: &'static str,
    pub loop_line: &'static str,
    pub try_usage: &'static str,
    /// Substring (any case) in the `try` branch that sends control to `catch`.
    pub try_trigger: &'static str,
    pub try_recovered: &'static str,
    pub try_succeeded: &'static str,
}

/// Surreal creative programming.
pub const IMAGINE3000: Profile = Profile {
    tag: ".imagine3000",
    empty: "💭 empty imagination",
    print: "✨ ",
    if_yes: "💡 ",
    if_no: "🌙 ",
    loop_line: "🔁 ",
    try_usage: "Usage: try <idea> catch <fallback>",
    try_trigger: "fail",
    try_recovered: "🚑 fallback: ",
    try_succeeded: "🚀 succeeded: ",
};

/// Reflective abstract programming. A `try` either holds as an argument or,
/// on a paradox, resolves into the synthesis given after `catch`.
pub const PHILOSOPHY: Profile = Profile {
    tag: ".philosophy",
    empty: "🤔 silence",
    print: "📜 ",
    if_yes: "⚖️ Thesis: ",
    if_no: "🌀 Antithesis: ",
    loop_line: "♻️ Reflect: ",
    try_usage: "Usage: try <thesis> catch <antithesis>",
    try_trigger: "paradox",
    try_recovered: "🔄 Synthesis: ",
    try_succeeded: "🧠 Reasoning holds: ",
};

/// Scientific simulation programming.
pub const PHYSICS: Profile = Profile {
    tag: ".physics",
    empty: "⚛️ no experiment",
    print: "🔬 ",
    if_yes: "✅ Law holds: ",
    if_no: "❌ Rejected: ",
    loop_line: "🔁 Sim step: ",
    try_usage: "Usage: try <experiment> catch <fallback>",
    try_trigger: "error",
    try_recovered: "🧯 Using fallback law: ",
    try_succeeded: "⚡ Experiment succeeded: ",
};

/// Built-in languages in registry order.
pub const BUILTIN_PROFILES: [Profile; 3] = [IMAGINE3000, PHILOSOPHY, PHYSICS];

/// A toy language: one [`Profile`] driving the shared command logic.
#[derive(Debug, Clone)]
pub struct Language {
    profile: Profile,
    trigger: Regex,
}

impl Language {
    /// Build a language from its profile, compiling the `try` trigger matcher.
    pub fn new(profile: Profile) -> Result<Self> {
        let trigger = RegexBuilder::new(&regex::escape(profile.try_trigger))
            .case_insensitive(true)
            .build()
            .with_context(|| format!("{}: bad try trigger {:?}", profile.tag, profile.try_trigger))?;
        Ok(Self { profile, trigger })
    }

    /// All built-in languages, ready to register.
    pub fn builtin() -> Result<Vec<Self>> {
        BUILTIN_PROFILES.into_iter().map(Self::new).collect()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    fn render(&self, command: Command<'_>) -> Result<String> {
        let p = &self.profile;
        let out = match command {
            Command::Empty => p.empty.to_string(),
            Command::Print { text } => format!("{}{}", p.print, text),
            Command::If { condition, yes, no } => {
                if eval_condition(condition) {
                    format!("{}{}", p.if_yes, yes)
                } else {
                    format!("{}{}", p.if_no, no)
                }
            }
            Command::Loop { count, body } => {
                if count > MAX_LOOP_REPEATS {
                    bail!(
                        "loop count {} exceeds the limit of {} repetitions",
                        count,
                        MAX_LOOP_REPEATS
                    );
                }
                let line = format!("{}{}", p.loop_line, body);
                vec![line; count.max(0) as usize].join("\n")
            }
            Command::Try { attempt, fallback } => {
                if self.trigger.is_match(attempt) {
                    format!("{}{}", p.try_recovered, fallback)
                } else {
                    format!("{}{}", p.try_succeeded, attempt)
                }
            }
            Command::Unknown { keyword } => format!("Unknown {} command: {}", p.tag, keyword),
            Command::Malformed(Kind::If) => IF_USAGE.to_string(),
            Command::Malformed(Kind::Loop) => LOOP_USAGE.to_string(),
            Command::Malformed(Kind::Try) => p.try_usage.to_string(),
        };
        Ok(out)
    }
}

impl Dispatcher for Language {
    fn tag(&self) -> &str {
        self.profile.tag
    }

    fn dispatch(&self, code: &str) -> Result<String> {
        self.render(parser::parse(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(profile: Profile) -> Language {
        Language::new(profile).unwrap()
    }

    fn run(profile: Profile, code: &str) -> String {
        lang(profile).dispatch(code).unwrap()
    }

    #[test]
    fn test_builtin_tags_in_order() {
        let tags: Vec<String> = Language::builtin()
            .unwrap()
            .iter()
            .map(|l| l.tag().to_string())
            .collect();
        assert_eq!(tags, vec![".imagine3000", ".philosophy", ".physics"]);
    }

    #[test]
    fn test_builtin_languages_keep_their_profiles() {
        let languages = Language::builtin().unwrap();
        for (language, profile) in languages.iter().zip(BUILTIN_PROFILES) {
            assert_eq!(*language.profile(), profile);
            assert_eq!(language.tag(), profile.tag);
        }
    }

    #[test]
    fn test_empty_placeholders() {
        assert_eq!(run(IMAGINE3000, ""), "💭 empty imagination");
        assert_eq!(run(PHILOSOPHY, "  "), "🤔 silence");
        assert_eq!(run(PHYSICS, ""), "⚛️ no experiment");
    }

    #[test]
    fn test_print_under_each_language() {
        assert_eq!(run(IMAGINE3000, "print hello world"), "✨ hello world");
        assert_eq!(run(PHILOSOPHY, "print hello world"), "📜 hello world");
        assert_eq!(run(PHYSICS, "print hello world"), "🔬 hello world");
        assert_eq!(run(PHYSICS, "print"), "🔬 ");
    }

    #[test]
    fn test_print_keeps_quotes_and_inner_spacing() {
        assert_eq!(
            run(PHILOSOPHY, "print \"I think  therefore I am\""),
            "📜 \"I think  therefore I am\""
        );
    }

    #[test]
    fn test_if_branches() {
        assert_eq!(run(IMAGINE3000, "if true then A else B"), "💡 A");
        assert_eq!(run(IMAGINE3000, "if false then A else B"), "🌙 B");
        assert_eq!(run(IMAGINE3000, "if yes then A"), "💡 A");
        assert_eq!(run(IMAGINE3000, "if no then A"), "🌙 ");

        assert_eq!(run(PHILOSOPHY, "if false then existence else illusion"), "🌀 Antithesis: illusion");
        assert_eq!(run(PHILOSOPHY, "if CERTAIN then existence"), "⚖️ Thesis: existence");

        assert_eq!(run(PHYSICS, "if true then stable orbit else chaos"), "✅ Law holds: stable orbit");
        assert_eq!(run(PHYSICS, "if 0 then stable orbit else chaos"), "❌ Rejected: chaos");
    }

    #[test]
    fn test_if_without_then_gives_usage() {
        for profile in BUILTIN_PROFILES {
            assert_eq!(run(profile, "if true A else B"), IF_USAGE);
        }
    }

    #[test]
    fn test_loop_repeats_lines() {
        let out = run(IMAGINE3000, "loop 3 jump");
        assert_eq!(out, "🔁 jump\n🔁 jump\n🔁 jump");
        assert_eq!(out.lines().count(), 3);

        assert_eq!(run(PHILOSOPHY, "loop 2 meditate"), "♻️ Reflect: meditate\n♻️ Reflect: meditate");
        assert_eq!(run(PHYSICS, "loop 1 simulate particle"), "🔁 Sim step: simulate particle");
    }

    #[test]
    fn test_loop_with_zero_or_negative_count_is_empty() {
        assert_eq!(run(PHYSICS, "loop 0 x"), "");
        assert_eq!(run(PHYSICS, "loop -4 x"), "");
    }

    #[test]
    fn test_loop_malformed_gives_usage() {
        for profile in BUILTIN_PROFILES {
            assert_eq!(run(profile, "loop x jump"), LOOP_USAGE);
            assert_eq!(run(profile, "loop 3"), LOOP_USAGE);
        }
    }

    #[test]
    fn test_loop_counts_beyond_i64() {
        assert_eq!(run(PHYSICS, "loop -99999999999999999999 x"), "");
        assert_eq!(run(PHYSICS, "loop 1_0 x").lines().count(), 10);
        let err = lang(PHYSICS)
            .dispatch("loop 99999999999999999999 x")
            .unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn test_loop_over_limit_is_a_fault() {
        let err = lang(IMAGINE3000)
            .dispatch(&format!("loop {} x", MAX_LOOP_REPEATS + 1))
            .unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn test_try_fallback_and_success() {
        assert_eq!(run(IMAGINE3000, "try fail big catch small"), "🚑 fallback: small");
        assert_eq!(run(IMAGINE3000, "try fine idea catch backup"), "🚀 succeeded: fine idea");
        assert_eq!(run(IMAGINE3000, "try FAILURE catch net"), "🚑 fallback: net");

        assert_eq!(run(PHYSICS, "try big Error catch small"), "🧯 Using fallback law: small");
        assert_eq!(run(PHYSICS, "try fine idea catch backup"), "⚡ Experiment succeeded: fine idea");
    }

    #[test]
    fn test_try_trigger_is_checked_in_attempt_only() {
        assert_eq!(run(PHYSICS, "try experiment catch error law"), "⚡ Experiment succeeded: experiment");
        assert_eq!(run(IMAGINE3000, "try flying machine catch parachute"), "🚀 succeeded: flying machine");
    }

    #[test]
    fn test_try_dialectic() {
        assert_eq!(run(PHILOSOPHY, "try paradox catch synthesis"), "🔄 Synthesis: synthesis");
        assert_eq!(run(PHILOSOPHY, "try cogito catch doubt"), "🧠 Reasoning holds: cogito");
        // the other languages' triggers mean nothing here
        assert_eq!(run(PHILOSOPHY, "try fail catch x"), "🧠 Reasoning holds: fail");
    }

    #[test]
    fn test_try_without_catch_gives_language_usage() {
        assert_eq!(run(IMAGINE3000, "try flying"), "Usage: try <idea> catch <fallback>");
        assert_eq!(run(PHILOSOPHY, "try flying"), "Usage: try <thesis> catch <antithesis>");
        assert_eq!(run(PHYSICS, "try flying"), "Usage: try <experiment> catch <fallback>");
    }

    #[test]
    fn test_unknown_command_names_token_and_tag() {
        assert_eq!(run(IMAGINE3000, "dance now"), "Unknown .imagine3000 command: dance");
        assert_eq!(run(PHILOSOPHY, "ponder"), "Unknown .philosophy command: ponder");
        assert_eq!(run(PHYSICS, "collide a b"), "Unknown .physics command: collide");
    }

    #[test]
    fn test_dispatch_is_repeatable() {
        let physics = lang(PHYSICS);
        for code in ["print x", "if true then a else b", "loop 2 y", "try error catch z", "what"] {
            assert_eq!(physics.dispatch(code).unwrap(), physics.dispatch(code).unwrap());
        }
    }
}
