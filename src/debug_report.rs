use rexgen::{RecognitionDetails, RecognitionVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &RecognitionVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Recognizing: \"{}\"", res.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Phases ━━━", ansi::GRAY));
    print_phases(&res.details, &palette);

    println!("\n{}", palette.paint("━━━ Candidates ━━━", ansi::GRAY));
    print_candidates(res, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Enumeration: {}  │  Ranking: {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        palette.paint(format!("{:?}", res.details.matching), ansi::CYAN),
        palette.dim(format!("{:?}", res.details.enumeration)),
        palette.dim(format!("{:?}", res.details.ranking)),
    );
    println!();
}

fn print_phases(details: &RecognitionDetails, palette: &ansi::Palette) {
    println!(
        "  {} {}  {}",
        palette.paint("Matching:", ansi::BLUE),
        if details.matches_found > 0 {
            palette.paint(format!("✓ {} matches", details.matches_found), ansi::GREEN)
        } else {
            palette.dim("✗ 0 matches".to_string())
        },
        palette.dim(format!(
            "({} patterns scanned, {} skipped)",
            details.patterns_scanned, details.patterns_skipped
        )),
    );
    if !details.active_patterns.is_empty() {
        println!("    {}", palette.dim(details.active_patterns.join(", ")));
    }

    println!(
        "  {} {} {}",
        palette.paint("Lattice:", ansi::BLUE),
        palette.paint(format!("{} edges", details.lattice_edges), ansi::YELLOW),
        palette.dim(format!("({} literal fallbacks)", details.literal_edges)),
    );

    println!(
        "  {} {}  {}",
        palette.paint("Enumeration:", ansi::BLUE),
        palette.paint(format!("{} covers", details.covers_found), ansi::YELLOW),
        palette.dim(format!("({} steps, {} pruned)", details.steps, details.pruned)),
    );
    if details.budget_exhausted {
        println!(
            "    {}",
            palette.paint("⚠  step budget exhausted; ranking what was found", ansi::YELLOW)
        );
    }

    println!(
        "  {} {}",
        palette.paint("Ranking:", ansi::BLUE),
        palette.dim(format!(
            "{} rendered, {} duplicates dropped",
            details.covers_rendered, details.duplicates_dropped
        )),
    );
}

fn print_candidates(res: &RecognitionVerbose, palette: &ansi::Palette) {
    for (idx, candidate) in res.results.iter().enumerate() {
        println!(
            "  {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(format!("score {}", candidate.score), ansi::YELLOW),
        );
        println!("      {}", palette.bold(palette.paint(&candidate.pattern, ansi::GREEN)));
        for part in &candidate.parts {
            let label = match &part.name {
                Some(name) => palette.paint(name, ansi::BLUE),
                None => palette.dim("literal"),
            };
            println!(
                "        {} {} {}",
                label,
                palette.dim("│"),
                palette.paint(format!("{:?}", part.text), ansi::CYAN),
            );
        }
    }
}
