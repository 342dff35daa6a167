use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use curriculum_scheduler::parser::{load_input_from_dir, validate_input};
use curriculum_scheduler::reporter::{generate_reports, print_summary, OutputFormat};
use curriculum_scheduler::scheduler::{generate, generate_schedule};
use curriculum_scheduler::store::{InMemoryStore, ScheduleStore};
use curriculum_scheduler::types::GenerationResult;
use curriculum_scheduler::validator::validate;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "curriculum-scheduler")]
#[command(about = "Constraint-based university class-schedule generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run demo with sample curriculum data
    Demo,

    /// Generate a schedule from input data, filtered to one curriculum offering
    Generate {
        /// Directory containing courses.json, instructors.json, rooms.json, config.toml
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for schedule files
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Suppress progress output, print JSON summary only
        #[arg(short, long)]
        quiet: bool,

        /// Curriculum year to schedule, e.g. "2025-2026"
        #[arg(long)]
        curriculum_year: String,

        /// Semester to schedule: "1st Semester", "2nd Semester", or "Summer"
        #[arg(long)]
        semester: String,

        /// Restrict to one program code; omit or pass "all" for every program
        #[arg(long)]
        program: Option<String>,
    },

    /// Re-validate a previously generated schedule.json against its input data
    Validate {
        /// Path to a schedule.json produced by `generate`
        #[arg(short, long)]
        schedule: PathBuf,

        /// Directory containing the input data used to generate it
        #[arg(short, long)]
        data: PathBuf,

        /// Show every violation, not just the totals
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a schedule and save it into the in-memory store
    Save {
        /// Directory containing input data
        #[arg(short, long)]
        data: PathBuf,

        /// Curriculum year to schedule and save under, e.g. "2025-2026"
        #[arg(long)]
        curriculum_year: String,

        /// Semester to schedule and save under: "1st Semester", "2nd Semester", or "Summer"
        #[arg(long)]
        semester: String,

        /// Restrict to one program code; omit or pass "all" for every program
        #[arg(long)]
        program: Option<String>,
    },

    /// Generate, save, then list the persisted sessions for one run
    List {
        /// Directory containing input data
        #[arg(short, long)]
        data: PathBuf,

        /// Curriculum year to schedule and save under, e.g. "2025-2026"
        #[arg(long)]
        curriculum_year: String,

        /// Semester to schedule and save under: "1st Semester", "2nd Semester", or "Summer"
        #[arg(long)]
        semester: String,

        /// Restrict to one program code; omit or pass "all" for every program
        #[arg(long)]
        program: Option<String>,
    },

    /// Print the curriculum prospectus (course offerings, independent of scheduling)
    Prospectus {
        /// Directory containing input data
        #[arg(short, long)]
        data: PathBuf,

        /// Academic year to list, e.g. "2025-2026"
        #[arg(long)]
        academic_year: String,

        /// Restrict to one program code; defaults to every program
        #[arg(long, default_value = "all")]
        program: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Generate {
            data,
            output,
            format,
            quiet,
            curriculum_year,
            semester,
            program,
        } => run_generate(&data, &output, &format, quiet, &curriculum_year, &semester, program.as_deref()),
        Commands::Validate {
            schedule,
            data,
            verbose,
        } => run_validate(&schedule, &data, verbose),
        Commands::Save {
            data,
            curriculum_year,
            semester,
            program,
        } => run_save(&data, &curriculum_year, &semester, program.as_deref()),
        Commands::List {
            data,
            curriculum_year,
            semester,
            program,
        } => run_list(&data, &curriculum_year, &semester, program.as_deref()),
        Commands::Prospectus {
            data,
            academic_year,
            program,
        } => run_prospectus(&data, &academic_year, &program),
    }
}

fn run_demo() -> Result<()> {
    println!("{}", "Curriculum Scheduler Demo".bold().cyan());
    println!("{}", "─".repeat(40));

    let demo_path = PathBuf::from("demos/curriculum");
    let output_path = PathBuf::from("output");

    if !demo_path.join("courses.json").exists() {
        println!("{}", "Demo data not found. Creating sample data...".yellow());
        create_demo_data(&demo_path)?;
    }

    println!("Loading demo data from: {}", demo_path.display());
    let input = load_input_from_dir(&demo_path).context("Failed to load demo data")?;

    let validation_result = validate_input(&input)?;
    for warning in &validation_result.warnings {
        println!("{} {}", "Warning:".yellow(), warning);
    }

    println!(
        "Loaded {} courses, {} instructors, {} rooms",
        input.courses.len(),
        input.instructors.len(),
        input.rooms.len()
    );

    println!("\nGenerating schedule...\n");
    let result = generate_schedule(&input, false)?;
    let validation = validate(&input.courses, &result.subjects);

    print_summary(&result, &validation);

    generate_reports(
        &result,
        &validation,
        &output_path,
        &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text],
    )?;
    println!("Reports written to: {}", output_path.display().to_string().green());

    Ok(())
}

fn run_generate(
    data: &Path,
    output: &Path,
    format: &str,
    quiet: bool,
    curriculum_year: &str,
    semester: &str,
    program: Option<&str>,
) -> Result<()> {
    let input = load_input_from_dir(data).context("Failed to load input data")?;

    if !quiet {
        let validation_result = validate_input(&input)?;
        for warning in &validation_result.warnings {
            println!("{} {}", "Warning:".yellow(), warning);
        }
        println!(
            "Loaded {} courses, {} instructors, {} rooms",
            input.courses.len(),
            input.instructors.len(),
            input.rooms.len()
        );
    } else {
        validate_input(&input)?;
    }

    let store = InMemoryStore::new(input.courses.clone(), input.instructors.clone(), input.rooms.clone());
    let result = generate(&store, curriculum_year, semester, program, &input.config, quiet)?;
    let validation = validate(&input.courses, &result.subjects);

    let formats = parse_formats(format);
    generate_reports(&result, &validation, output, &formats)?;

    if quiet {
        let summary = curriculum_scheduler::reporter::generate_json_summary(&result)?;
        println!("{}", summary);
    } else {
        print_summary(&result, &validation);
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_validate(schedule_path: &Path, data: &Path, verbose: bool) -> Result<()> {
    let input = load_input_from_dir(data)?;

    let schedule_json = std::fs::read_to_string(schedule_path)?;
    let result: GenerationResult = serde_json::from_str(&schedule_json)?;

    let validation = validate(&input.courses, &result.subjects);

    if validation.total_errors == 0 {
        println!("{}", "✓ Schedule is valid".green().bold());
    } else {
        println!("{}", "✗ Schedule has violations".red().bold());
        for v in &validation.violations {
            println!("  - {}: {}", v.constraint.red(), v.message);
        }
    }

    if verbose {
        println!("\n{}", "All violations:".bold());
        for v in &validation.violations {
            println!("  [{:?}] {}: {}", v.severity, v.constraint, v.message);
        }
    }

    println!("\nOptimization Score: {:.1}/100", validation.optimization_score);

    Ok(())
}

fn run_save(data: &Path, curriculum_year: &str, semester: &str, program: Option<&str>) -> Result<()> {
    let input = load_input_from_dir(data)?;

    let store = InMemoryStore::new(input.courses.clone(), input.instructors.clone(), input.rooms.clone());
    let result = generate(&store, curriculum_year, semester, program, &input.config, false)?;

    let save_result = store.save(&result.subjects)?;
    println!(
        "{} {} sessions saved for {} {} ({} replaced)",
        "✓".green().bold(),
        save_result.inserted,
        curriculum_year,
        semester,
        save_result.deleted
    );

    Ok(())
}

fn run_list(data: &Path, curriculum_year: &str, semester: &str, program: Option<&str>) -> Result<()> {
    let input = load_input_from_dir(data)?;

    let store = InMemoryStore::new(input.courses.clone(), input.instructors.clone(), input.rooms.clone());
    let result = generate(&store, curriculum_year, semester, program, &input.config, true)?;
    store.save(&result.subjects)?;

    let rows = store.list(Some(curriculum_year))?;
    println!("{}", format!("{} persisted sessions:", rows.len()).bold());
    for row in &rows {
        println!(
            "  #{:<4} {} | {} {}–{} | {} | {} | {}",
            row.id, row.subject_code, row.day, row.start_time, row.end_time, row.room_name, row.faculty_name, row.status.as_str()
        );
    }

    Ok(())
}

fn run_prospectus(data: &Path, academic_year: &str, program: &str) -> Result<()> {
    let input = load_input_from_dir(data)?;
    let store = InMemoryStore::new(input.courses, input.instructors, input.rooms);
    let view = store.get_prospectus(academic_year, program)?;

    println!("{}", "Curriculum Prospectus".bold().cyan());
    println!("{}", "─".repeat(40));
    for group in &view.groups {
        println!("\n{} — {}", group.year_level, group.semester);
        for row in &group.rows {
            println!(
                "  {} {} | {} — {} | lec {} / lab {} ({} units)",
                row.curriculum_year,
                row.program,
                row.subject_code,
                row.subject_name,
                row.lec_units,
                row.lab_units,
                row.total_units
            );
        }
    }

    Ok(())
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

fn create_demo_data(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let courses = serde_json::json!([
        {"id": "c-cs101", "curriculum_year": "2025-2026", "program": "BSCS", "year_level": "1st Year", "semester": "1st Semester", "subject_code": "CS101", "subject_name": "Introduction to Programming", "lec_units": 3, "lab_units": 1, "department": "BSCS", "tags": ["programming"]},
        {"id": "c-cs102", "curriculum_year": "2025-2026", "program": "BSCS", "year_level": "1st Year", "semester": "1st Semester", "subject_code": "CS102", "subject_name": "Discrete Mathematics", "lec_units": 3, "lab_units": 0, "department": "BSCS", "tags": ["math"]},
        {"id": "c-cs201", "curriculum_year": "2025-2026", "program": "BSCS", "year_level": "2nd Year", "semester": "1st Semester", "subject_code": "CS201", "subject_name": "Data Structures and Algorithms", "lec_units": 3, "lab_units": 1, "department": "BSCS", "tags": ["programming", "algorithms"]},
        {"id": "c-act101", "curriculum_year": "2025-2026", "program": "ACT", "year_level": "1st Year", "semester": "1st Semester", "subject_code": "ACT101", "subject_name": "Computer Fundamentals", "lec_units": 2, "lab_units": 1, "department": "ACT", "tags": ["fundamentals"]},
        {"id": "c-ge101", "curriculum_year": "2025-2026", "program": "BSCS", "year_level": "1st Year", "semester": "1st Semester", "subject_code": "GE101", "subject_name": "Purposive Communication", "lec_units": 3, "lab_units": 0, "department": null, "tags": ["communication"]}
    ]);
    std::fs::write(path.join("courses.json"), serde_json::to_string_pretty(&courses)?)?;

    let instructors = serde_json::json!([
        {"id": "f-001", "first_name": "Ada", "last_name": "Lovelace", "role": "FACULTY", "designation": "Regular Full-time", "department": "BSCS", "specializations": ["programming", "algorithms"], "previous_subjects": ["CS101", "CS201"], "years_of_experience": 12, "available_days": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"], "status": "APPROVED"},
        {"id": "f-002", "first_name": "Alan", "last_name": "Turing", "role": "FACULTY", "designation": "Regular Full-time", "department": "BSCS", "specializations": ["math", "fundamentals"], "previous_subjects": ["CS102"], "years_of_experience": 8, "available_days": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"], "status": "APPROVED"},
        {"id": "f-003", "first_name": "Grace", "last_name": "Hopper", "role": "DEPARTMENT_HEAD", "designation": "Regular", "department": "ACT", "specializations": ["fundamentals", "programming"], "previous_subjects": ["ACT101"], "years_of_experience": 20, "available_days": ["Monday", "Wednesday", "Friday"], "status": "APPROVED"},
        {"id": "f-004", "first_name": "Rosa", "last_name": "Parks", "role": "FACULTY", "designation": "Part-time", "department": "BSCS", "specializations": ["communication"], "previous_subjects": [], "years_of_experience": 5, "available_days": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"], "status": "APPROVED"}
    ]);
    std::fs::write(path.join("instructors.json"), serde_json::to_string_pretty(&instructors)?)?;

    let rooms = serde_json::json!([
        {"id": "r-101", "name": "Room 101"},
        {"id": "r-102", "name": "Room 102"},
        {"id": "r-lab1", "name": "Computer Lab 1"},
        {"id": "r-lab2", "name": "Computer Lab 2"}
    ]);
    std::fs::write(path.join("rooms.json"), serde_json::to_string_pretty(&rooms)?)?;

    std::fs::write(
        path.join("config.toml"),
        "global_max_units = 18\ncampus_admin_max_units = 6\nmin_rest_minutes = 30\n",
    )?;

    println!("{}", "Demo data created successfully!".green());
    Ok(())
}
