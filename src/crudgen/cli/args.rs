use clap::Parser;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "crudgen", bin_name = "crudgen", version = get_version())]
#[command(about = "UML-to-CRUD generator client", long_about = None)]
pub struct Cli {
    /// Command: generate, validate
    #[arg(long, default_value = "generate")]
    pub cmd: String,

    /// UML diagram file (required)
    #[arg(short, long)]
    pub uml: Option<String>,

    /// Output directory (required)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Target framework: spring-boot, django, flask, dotnet, express [default: spring-boot]
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Package name [default: com.example]
    #[arg(short, long)]
    pub package: Option<String>,

    /// API URL [default: http://localhost:8080]
    #[arg(long)]
    pub api_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// `--uml` and `--output`, if both were given a non-empty value.
    pub fn required_paths(&self) -> Option<(&str, &str)> {
        let uml = self.uml.as_deref().filter(|s| !s.is_empty())?;
        let output = self.output.as_deref().filter(|s| !s.is_empty())?;
        Some((uml, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("crudgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["--uml", "a.puml", "--output", "out"]);
        assert_eq!(cli.cmd, "generate");
        assert_eq!(cli.framework, None);
        assert_eq!(cli.package, None);
        assert_eq!(cli.api_url, None);
        assert!(!cli.verbose);
        assert_eq!(cli.required_paths(), Some(("a.puml", "out")));
    }

    #[test]
    fn long_and_short_flags() {
        let cli = parse(&[
            "--cmd",
            "validate",
            "-u",
            "m.puml",
            "-o",
            "gen",
            "-f",
            "django",
            "-p",
            "org.acme",
            "--api-url",
            "http://svc:9000",
            "-v",
        ]);
        assert_eq!(cli.cmd, "validate");
        assert_eq!(cli.framework.as_deref(), Some("django"));
        assert_eq!(cli.package.as_deref(), Some("org.acme"));
        assert_eq!(cli.api_url.as_deref(), Some("http://svc:9000"));
        assert!(cli.verbose);
    }

    #[test]
    fn missing_or_empty_required_paths() {
        assert_eq!(parse(&[]).required_paths(), None);
        assert_eq!(parse(&["--uml", "a.puml"]).required_paths(), None);
        assert_eq!(parse(&["--uml=", "--output", "out"]).required_paths(), None);
    }
}
