pub(crate) const BANNER: &str = "Welcome to the AI Programming REPL! Type 'help' for instructions.";

pub(crate) const GOODBYE: &str = "Goodbye!";

pub(crate) const UNKNOWN_PREFIX: &str = "Unknown language prefix. Type 'help' for instructions.";

/// Help screen listing the registered language tags.
pub(crate) fn help_text<'a>(tags: impl IntoIterator<Item = &'a str>) -> String {
    let tags: Vec<&str> = tags.into_iter().collect();
    format!(
        "
AI Programming REPL
Available languages: {}
Common commands:
  print <text>
  if <condition> then <yes> else <no>
  loop <n> <action>
  try <expr> catch <fallback>

Type 'examples' for usage.
",
        tags.join(", ")
    )
}

pub(crate) const EXAMPLES_TEXT: &str = r#"
Examples:

.imagine3000 print rainbow code
.imagine3000 if true then dream big else stay small
.imagine3000 loop 3 paint stars
.imagine3000 try flying machine catch parachute

.philosophy print "I think therefore I am"
.philosophy if false then existence else illusion
.philosophy loop 2 meditate
.philosophy try paradox catch synthesis

.physics print gravity detected
.physics if true then stable orbit else chaos
.physics loop 3 simulate particle
.physics try experiment catch error law
"#;
