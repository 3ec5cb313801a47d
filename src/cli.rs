// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "model-viewer")]
#[command(about = "Interactive textured model viewer", long_about = None)]
pub struct Cli {
    /// Directory containing .obj models
    pub model_dir: PathBuf,

    /// Directory containing .png textures
    pub texture_dir: PathBuf,

    /// Disable the in-place console status block
    #[arg(long = "no-status", default_value = "false")]
    pub no_status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_directories() {
        let cli = Cli::parse_from(["model-viewer", "assets/models", "assets/textures"]);
        assert_eq!(cli.model_dir, PathBuf::from("assets/models"));
        assert_eq!(cli.texture_dir, PathBuf::from("assets/textures"));
        assert!(!cli.no_status);
    }

    #[test]
    fn no_status_flag() {
        let cli = Cli::parse_from(["model-viewer", "m", "t", "--no-status"]);
        assert!(cli.no_status);
    }

    #[test]
    fn missing_directories_is_an_error() {
        assert!(Cli::try_parse_from(["model-viewer", "only-one"]).is_err());
    }
}
