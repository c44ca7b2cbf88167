use argh::FromArgs;

/// Settings for the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text shown before each input line.
    pub prompt: String,
    /// Print the welcome banner before the first prompt.
    pub show_banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            show_banner: true,
        }
    }
}

#[derive(FromArgs, Debug)]
/// Interactive loop for the .imagine3000, .philosophy and .physics toy languages.
pub struct Args {
    #[argh(option, short = 'c')]
    /// process this line instead of starting the interactive loop; may be repeated.
    pub command: Vec<String>,

    #[argh(option, default = "String::from(\">> \")")]
    /// prompt shown before each input line.
    pub prompt: String,

    #[argh(switch)]
    /// do not print the welcome banner.
    pub no_banner: bool,

    #[argh(switch, short = 'v')]
    /// log debug messages to standard error.
    pub verbose: bool,
}

impl Args {
    pub fn repl_config(&self) -> ReplConfig {
        ReplConfig {
            prompt: self.prompt.clone(),
            show_banner: !self.no_banner,
        }
    }
}
