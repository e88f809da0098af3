//! Pentaguard Headless Team Finder
//!
//! Loads the guardian and skill catalogs, assembles candidate teams with
//! shuffled greedy passes, keeps the complete unseen ones, and prints each
//! accepted roster ranked by power. Runs entirely in-process, with no
//! networking and no persistence.
//!
//! Usage:
//!   cargo run -p pentaguard-finder
//!   cargo run -p pentaguard-finder -- --teams 8 --seed 7
//!   cargo run -p pentaguard-finder -- --list
//!   cargo run -p pentaguard-finder -- --pool aldric,elowen,gareth

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::process;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pentaguard_logic::assemble::find_team;
use pentaguard_logic::catalog::{
    list_guardians, validate_catalog, Catalog, CatalogError, Guardian, Skill,
};
use pentaguard_logic::power::team_power;
use pentaguard_logic::team::{is_valid, Team};

// ── Embedded default catalogs ───────────────────────────────────────────
const GUARDIANS_JSON: &str = include_str!("../../../data/guardians.json");
const SKILLS_JSON: &str = include_str!("../../../data/skills.json");

const USAGE: &str = "\
Usage: pentaguard-finder [OPTIONS]

Options:
  --list             print the guardian roster and exit
  --teams N          number of distinct teams to find (default 5)
  --attempts N       assembly attempt budget (default 1000)
  --seed S           seed the RNG for reproducible output
  --pool a,b,c       restrict assembly to these catalog ids
  --guardians PATH   guardian catalog JSON (default: embedded)
  --skills PATH      skill catalog JSON (default: embedded)
  --verbose          print search statistics
  --help             show this help";

// ── Options ─────────────────────────────────────────────────────────────

struct Options {
    list: bool,
    help: bool,
    teams: usize,
    attempts: usize,
    seed: Option<u64>,
    pool: Option<Vec<String>>,
    guardians_path: Option<String>,
    skills_path: Option<String>,
    verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            list: false,
            help: false,
            teams: 5,
            attempts: 1000,
            seed: None,
            pool: None,
            guardians_path: None,
            skills_path: None,
            verbose: false,
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => opts.list = true,
            "--help" => opts.help = true,
            "--verbose" => opts.verbose = true,
            "--teams" => opts.teams = parse_count(&mut args, "--teams")?,
            "--attempts" => opts.attempts = parse_count(&mut args, "--attempts")?,
            "--seed" => {
                let raw = take_value(&mut args, "--seed")?;
                let seed: u64 = raw
                    .parse()
                    .map_err(|_| format!("--seed expects an integer, got '{}'", raw))?;
                opts.seed = Some(seed);
            }
            "--pool" => {
                let raw = take_value(&mut args, "--pool")?;
                let ids: Vec<String> = raw
                    .split(',')
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect();
                opts.pool = Some(ids);
            }
            "--guardians" => opts.guardians_path = Some(take_value(&mut args, "--guardians")?),
            "--skills" => opts.skills_path = Some(take_value(&mut args, "--skills")?),
            other => return Err(format!("unknown option '{}'", other)),
        }
    }
    Ok(opts)
}

fn take_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{} expects a value", flag))
}

fn parse_count(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<usize, String> {
    let raw = take_value(args, flag)?;
    raw.parse()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, raw))
}

// ── Catalog loading ─────────────────────────────────────────────────────

#[derive(Debug)]
enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "io error: {}", e),
            LoadError::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Load both catalog documents, from disk when a path override is given
/// and from the embedded defaults otherwise.
fn load_catalog(opts: &Options) -> Result<Catalog, LoadError> {
    let guardians: BTreeMap<String, Guardian> = match &opts.guardians_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => serde_json::from_str(GUARDIANS_JSON)?,
    };
    let skills: BTreeMap<String, Skill> = match &opts.skills_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => serde_json::from_str(SKILLS_JSON)?,
    };
    Ok(Catalog::new(guardians, skills))
}

// ── Search loop ─────────────────────────────────────────────────────────

struct SearchStats {
    attempts: usize,
    duplicates: usize,
    incomplete: usize,
}

/// Retry assembly until enough distinct complete teams have been accepted
/// or the attempt budget runs out.
fn collect_teams(catalog: &Catalog, opts: &Options, rng: &mut impl Rng) -> (Vec<Team>, SearchStats) {
    let mut accepted: Vec<Team> = Vec::new();
    let mut stats = SearchStats {
        attempts: 0,
        duplicates: 0,
        incomplete: 0,
    };
    while accepted.len() < opts.teams && stats.attempts < opts.attempts {
        stats.attempts += 1;
        let candidate = find_team(catalog, opts.pool.as_deref(), rng);
        if is_valid(&candidate, &accepted) {
            accepted.push(candidate);
        } else if !candidate.is_complete() {
            stats.incomplete += 1;
            log::debug!("attempt {}: incomplete team discarded", stats.attempts);
        } else {
            stats.duplicates += 1;
            log::debug!("attempt {}: duplicate team discarded", stats.attempts);
        }
    }
    (accepted, stats)
}

struct RankedTeam {
    team: Team,
    power: f32,
}

/// Score every accepted team and sort strongest first.
fn rank_teams(teams: Vec<Team>, catalog: &Catalog) -> Result<Vec<RankedTeam>, CatalogError> {
    let mut ranked = Vec::with_capacity(teams.len());
    for team in teams {
        let power = team_power(&team, catalog)?;
        ranked.push(RankedTeam { team, power });
    }
    ranked.sort_by(|a, b| b.power.partial_cmp(&a.power).unwrap_or(Ordering::Equal));
    Ok(ranked)
}

// ── Reporting ───────────────────────────────────────────────────────────

fn print_roster(catalog: &Catalog) {
    println!("=== Pentaguard Guardians ===\n");
    for row in list_guardians(catalog) {
        println!("  {:<12} {:<16} {}", row.id, row.name, row.direction.name());
    }
}

fn report(ranked: &[RankedTeam], stats: &SearchStats, opts: &Options) {
    println!("=== Pentaguard Team Finder ===\n");
    if ranked.is_empty() {
        println!("  no valid team found");
    }
    for (index, entry) in ranked.iter().enumerate() {
        println!("  #{:<3} {}  (power {})", index + 1, entry.team, entry.power);
    }
    if opts.verbose {
        println!(
            "\n  attempts: {} ({} duplicate, {} incomplete discarded)",
            stats.attempts, stats.duplicates, stats.incomplete
        );
    }
    println!(
        "\n=== RESULT: {}/{} teams in {} attempts ===",
        ranked.len(),
        opts.teams,
        stats.attempts
    );
}

fn main() {
    let opts = match parse_options(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("pentaguard-finder: {}", msg);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if opts.help {
        println!("{}", USAGE);
        return;
    }

    let catalog = match load_catalog(&opts) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("pentaguard-finder: failed to load catalogs: {}", e);
            process::exit(2);
        }
    };

    // A catalog that validates clean can never fail scoring later.
    let issues = validate_catalog(&catalog);
    if !issues.is_empty() {
        eprintln!("pentaguard-finder: catalog integrity check failed:");
        for issue in &issues {
            eprintln!("  {}", issue);
        }
        process::exit(2);
    }

    if opts.list {
        print_roster(&catalog);
        return;
    }

    if let Some(pool) = &opts.pool {
        for id in pool {
            if catalog.guardian(id).is_none() {
                log::warn!("pool id '{}' not in the catalog, ignoring", id);
            }
        }
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (teams, stats) = collect_teams(&catalog, &opts, &mut rng);
    let found = teams.len();
    let ranked = match rank_teams(teams, &catalog) {
        Ok(ranked) => ranked,
        Err(e) => {
            eprintln!("pentaguard-finder: {}", e);
            process::exit(2);
        }
    };

    report(&ranked, &stats, &opts);
    if found < opts.teams {
        process::exit(1);
    }
}
