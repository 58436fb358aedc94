#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output verbosity.
    ///
    /// `1` drops headers and banners, `2` prints bare results only.
    pub quiet: u8,
    /// Print records as JSON lines instead of formatted text.
    pub json: bool,
    pub no_banner: bool,
}
