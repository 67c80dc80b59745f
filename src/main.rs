//! Command-line shell for the school records API.
//!
//! # Usage
//!
//! ```bash
//! # Dashboard once, or refreshed every REFRESH_INTERVAL_MS
//! school-admin dashboard
//! school-admin watch
//!
//! # Lists with search and sort
//! school-admin teachers list --search math --sort name
//! school-admin courses list --sort student_count --desc
//!
//! # Records
//! school-admin students add --name "Ana Ruiz" --email ana@school.edu
//! school-admin courses add --name Algebra          # prompts for the teacher
//! school-admin enrollments update 4 --course 12
//! school-admin teachers delete 7 -y
//!
//! # Effective configuration, secrets masked
//! school-admin config
//! ```
//!
//! # Environment Variables
//!
//! See [`school_admin::config`]. A `.env` file in the working directory is
//! loaded first.

use school_admin::AppError;
use school_admin::application::services::{
    Catalog, Dashboard, DashboardService, ResourceService, RosterService, report_error,
};
use school_admin::config::{self, Config, mask_secret};
use school_admin::domain::aggregation::{
    CourseOverview, EnrollmentDetail, NO_TEACHER, SelectOption, StudentOverview, TeacherLoad,
};
use school_admin::domain::collaborators::{LoadingIndicator, Notifier, Severity};
use school_admin::domain::entities::{
    CoursePatch, EnrollmentPatch, Entity, NewCourse, NewEnrollment, NewStudent, NewTeacher,
    StudentPatch, Teacher, TeacherPatch,
};
use school_admin::domain::search::{ListQuery, SortDirection};
use school_admin::infrastructure::feedback::{
    ConsoleIndicator, ConsoleNotifier, NullIndicator, TracingNotifier,
};
use school_admin::infrastructure::http::HttpTransport;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::time::MissedTickBehavior;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Admin shell for teachers, students, courses and enrollments.
#[derive(Parser)]
#[command(name = "school-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, most popular courses and courses per teacher
    Dashboard,

    /// Redraw the dashboard every REFRESH_INTERVAL_MS until Ctrl-C
    Watch,

    /// Manage teachers
    Teachers {
        #[command(subcommand)]
        action: TeacherAction,
    },

    /// Manage students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Manage courses
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Manage enrollments
    Enrollments {
        #[command(subcommand)]
        action: EnrollmentAction,
    },

    /// Show the effective configuration
    Config,
}

/// Search and sort options shared by every `list` command.
#[derive(Args)]
struct ListArgs {
    /// Case-insensitive search term
    #[arg(short, long, default_value = "")]
    search: String,

    /// Field to sort by (e.g. name, course_count, registration_date)
    #[arg(long)]
    sort: Option<String>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    desc: bool,
}

impl ListArgs {
    fn query(&self) -> ListQuery {
        let query = ListQuery::search(self.search.as_str());
        match &self.sort {
            Some(field) => {
                let direction = if self.desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                query.sorted_by(field.as_str(), direction)
            }
            None => query,
        }
    }
}

#[derive(Subcommand)]
enum TeacherAction {
    /// List teachers
    List(ListArgs),

    /// Add a teacher (prompts for missing fields)
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        specialty: Option<String>,
    },

    /// Change fields of a teacher
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        specialty: Option<String>,
    },

    /// Delete a teacher
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum StudentAction {
    /// List students with their course count
    List(ListArgs),

    /// Add a student (prompts for missing fields)
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Registration date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Change fields of a student
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a student
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CourseAction {
    /// List courses with teacher and student count
    List(ListArgs),

    /// Add a course (prompts for missing fields)
    Add {
        #[arg(long)]
        name: Option<String>,

        /// Teacher id
        #[arg(long)]
        teacher: Option<i64>,
    },

    /// Change fields of a course
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        /// Teacher id
        #[arg(long)]
        teacher: Option<i64>,
    },

    /// Delete a course
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum EnrollmentAction {
    /// List enrollments with resolved names
    List(ListArgs),

    /// Enroll a student in a course (prompts for missing fields)
    Add {
        /// Student id
        #[arg(long)]
        student: Option<i64>,

        /// Course id
        #[arg(long)]
        course: Option<i64>,

        /// Enrollment date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Change fields of an enrollment
    Update {
        id: i64,

        #[arg(long)]
        student: Option<i64>,

        #[arg(long)]
        course: Option<i64>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete an enrollment
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Services wired to the HTTP transport and terminal collaborators.
struct Shell {
    catalog: Arc<Catalog<HttpTransport>>,
    roster: RosterService<HttpTransport>,
    dashboard: DashboardService<HttpTransport>,
    notifier: Arc<dyn Notifier>,
}

impl Shell {
    fn new(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let indicator: Arc<dyn LoadingIndicator> = if config.log_format == "json" {
            Arc::new(NullIndicator)
        } else {
            Arc::new(ConsoleIndicator::new())
        };
        let transport = Arc::new(HttpTransport::new(config, indicator)?);
        let catalog = Arc::new(Catalog::new(transport, &config.paths));

        Ok(Self {
            roster: RosterService::new(Arc::clone(&catalog)),
            dashboard: DashboardService::new(Arc::clone(&catalog), config.top_courses),
            catalog,
            notifier,
        })
    }

    fn success(&self, message: &str) {
        self.notifier.notify(message, Severity::Success);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "✗ Invalid configuration:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    if config.debug {
        config.print_summary();
    }

    // JSON logging: notifications become log events, no terminal decoration.
    let notifier: Arc<dyn Notifier> = if config.log_format == "json" {
        Arc::new(TracingNotifier::new())
    } else {
        Arc::new(ConsoleNotifier)
    };

    match run(cli.command, &config, Arc::clone(&notifier)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<AppError>() {
                Some(app_error) => report_error(notifier.as_ref(), app_error),
                None => notifier.notify(&format!("{e:#}"), Severity::Error),
            }
            ExitCode::FAILURE
        }
    }
}

/// Installs the global subscriber. Logs go to stderr so tables on stdout stay clean.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(config.effective_log_level())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(command: Commands, config: &Config, notifier: Arc<dyn Notifier>) -> Result<()> {
    let shell = Shell::new(config, notifier)?;

    match command {
        Commands::Dashboard => {
            let dashboard = shell.dashboard.load().await?;
            render_dashboard(&dashboard);
        }
        Commands::Watch => watch(&shell, config).await?,
        Commands::Teachers { action } => handle_teacher_action(&shell, action).await?,
        Commands::Students { action } => handle_student_action(&shell, action).await?,
        Commands::Courses { action } => handle_course_action(&shell, action).await?,
        Commands::Enrollments { action } => handle_enrollment_action(&shell, action).await?,
        Commands::Config => show_config(config),
    }

    Ok(())
}

/// Redraws the dashboard on every tick.
///
/// A failed refresh is reported and the previous screen stays visible until
/// the next tick.
async fn watch(shell: &Shell, config: &Config) -> Result<()> {
    let Some(period) = config.refresh_interval() else {
        shell.notifier.notify(
            "Auto-refresh is disabled (REFRESH_INTERVAL_MS=0); showing the dashboard once",
            Severity::Warning,
        );
        let dashboard = shell.dashboard.load().await?;
        render_dashboard(&dashboard);
        return Ok(());
    };

    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // One listener for the whole loop, so a signal during a refresh is not lost.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let refreshed = tokio::select! {
            _ = &mut ctrl_c => break,
            refreshed = async {
                ticker.tick().await;
                shell.dashboard.refresh(shell.notifier.as_ref()).await
            } => refreshed,
        };

        if let Some(dashboard) = refreshed {
            print!("\x1b[2J\x1b[H");
            render_dashboard(&dashboard);
            println!(
                "  {}",
                format!("Refreshing every {}s, Ctrl-C to stop", period.as_secs_f32())
                    .bright_black()
            );
        }
    }

    println!();
    shell.notifier.notify("Stopped", Severity::Info);
    Ok(())
}

async fn handle_teacher_action(shell: &Shell, action: TeacherAction) -> Result<()> {
    let service = &shell.catalog.teachers;

    match action {
        TeacherAction::List(args) => {
            let rows = shell.roster.teachers(&args.query()).await?;
            render_teachers(&rows);
        }
        TeacherAction::Add { name, specialty } => {
            let new = NewTeacher {
                name: value_or_prompt(name, "Name")?,
                specialty: value_or_prompt(specialty, "Specialty")?,
            };
            let teacher = service.create(new).await?;
            shell.success(&format!("Teacher #{} created successfully", teacher.id));
        }
        TeacherAction::Update {
            id,
            name,
            specialty,
        } => {
            let teacher = service.update(id, TeacherPatch { name, specialty }).await?;
            shell.success(&format!("Teacher #{} updated successfully", teacher.id));
        }
        TeacherAction::Delete { id, yes } => {
            delete_record(shell, service, id, yes, |t| {
                format!("{} ({})", t.name, t.specialty)
            })
            .await?;
        }
    }

    Ok(())
}

async fn handle_student_action(shell: &Shell, action: StudentAction) -> Result<()> {
    let service = &shell.catalog.students;

    match action {
        StudentAction::List(args) => {
            let rows = shell.roster.students(&args.query()).await?;
            render_students(&rows);
        }
        StudentAction::Add { name, email, date } => {
            let new = NewStudent {
                name: value_or_prompt(name, "Name")?,
                email: value_or_prompt(email, "Email")?,
                registration_date: date.unwrap_or_else(today),
            };
            let student = service.create(new).await?;
            shell.success(&format!("Student #{} created successfully", student.id));
        }
        StudentAction::Update {
            id,
            name,
            email,
            date,
        } => {
            let patch = StudentPatch {
                name,
                email,
                registration_date: date,
            };
            let student = service.update(id, patch).await?;
            shell.success(&format!("Student #{} updated successfully", student.id));
        }
        StudentAction::Delete { id, yes } => {
            delete_record(shell, service, id, yes, |s| {
                format!("{} <{}>", s.name, s.email)
            })
            .await?;
        }
    }

    Ok(())
}

async fn handle_course_action(shell: &Shell, action: CourseAction) -> Result<()> {
    let service = &shell.catalog.courses;

    match action {
        CourseAction::List(args) => {
            let rows = shell.roster.courses(&args.query()).await?;
            render_courses(&rows);
        }
        CourseAction::Add { name, teacher } => {
            let name = value_or_prompt(name, "Course name")?;
            let teacher_id = match teacher {
                Some(id) => id,
                None => pick("Teacher", &shell.roster.teacher_options().await?)?,
            };
            let course = service.create(NewCourse { name, teacher_id }).await?;
            shell.success(&format!("Course #{} created successfully", course.id));
        }
        CourseAction::Update { id, name, teacher } => {
            let patch = CoursePatch {
                name,
                teacher_id: teacher,
            };
            let course = service.update(id, patch).await?;
            shell.success(&format!("Course #{} updated successfully", course.id));
        }
        CourseAction::Delete { id, yes } => {
            delete_record(shell, service, id, yes, |c| c.name.clone()).await?;
        }
    }

    Ok(())
}

async fn handle_enrollment_action(shell: &Shell, action: EnrollmentAction) -> Result<()> {
    let service = &shell.catalog.enrollments;

    match action {
        EnrollmentAction::List(args) => {
            let rows = shell.roster.enrollments(&args.query()).await?;
            render_enrollments(&rows);
        }
        EnrollmentAction::Add {
            student,
            course,
            date,
        } => {
            let student_id = match student {
                Some(id) => id,
                None => pick("Student", &shell.roster.student_options().await?)?,
            };
            let course_id = match course {
                Some(id) => id,
                None => pick("Course", &shell.roster.course_options().await?)?,
            };
            let new = NewEnrollment {
                student_id,
                course_id,
                enrollment_date: date.unwrap_or_else(today),
            };
            let enrollment = service.create(new).await?;
            shell.success(&format!(
                "Enrollment #{} created successfully",
                enrollment.id
            ));
        }
        EnrollmentAction::Update {
            id,
            student,
            course,
            date,
        } => {
            let patch = EnrollmentPatch {
                student_id: student,
                course_id: course,
                enrollment_date: date,
            };
            let enrollment = service.update(id, patch).await?;
            shell.success(&format!(
                "Enrollment #{} updated successfully",
                enrollment.id
            ));
        }
        EnrollmentAction::Delete { id, yes } => {
            delete_record(shell, service, id, yes, |e| {
                format!("student #{} in course #{}", e.student_id, e.course_id)
            })
            .await?;
        }
    }

    Ok(())
}

/// Shows the record, asks for confirmation (default: No) and deletes it.
///
/// The preview is best-effort: if the record cannot be fetched, only the id is
/// shown and the delete is still offered.
async fn delete_record<E, F>(
    shell: &Shell,
    service: &ResourceService<E, HttpTransport>,
    id: i64,
    skip_confirm: bool,
    describe: F,
) -> Result<()>
where
    E: Entity,
    F: Fn(&E) -> String,
{
    let label = capitalize(E::NAME);

    match service.get(id).await {
        Ok(record) => println!("  {}: {}", label, describe(&record).cyan()),
        Err(e) => {
            warn!(entity = E::NAME, id, error = %e, "Delete preview unavailable");
            println!(
                "  {}: {}",
                label,
                format!("details unavailable ({})", e.user_message()).bright_black()
            );
        }
    }
    println!("  ID: {}", id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete this {}?", E::NAME))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(id).await?;
    shell.success(&format!("{label} deleted successfully"));

    Ok(())
}

fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Lets the user choose one option and returns its id.
fn pick(prompt: &str, options: &[SelectOption]) -> Result<i64> {
    if options.is_empty() {
        bail!("No {} records to choose from", prompt.to_lowercase());
    }

    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[index].id)
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM-DD`, or blank when the store has no date.
fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Base URL:         {}", config.base_url.bright_white());
    println!(
        "  API key:          {}",
        mask_secret(&config.api_key).bright_black()
    );
    println!(
        "  Auth token:       {}",
        mask_secret(&config.auth_token).bright_black()
    );
    println!("  Timeout:          {}ms", config.timeout_ms);
    println!(
        "  Refresh interval: {}",
        match config.refresh_interval() {
            Some(interval) => format!("{}ms", interval.as_millis()),
            None => "disabled".to_string(),
        }
    );
    println!("  Top courses:      {}", config.top_courses);
    println!("  Teachers path:    {}", config.paths.teachers.cyan());
    println!("  Students path:    {}", config.paths.students.cyan());
    println!("  Courses path:     {}", config.paths.courses.cyan());
    println!("  Enrollments path: {}", config.paths.enrollments.cyan());
    println!("  Log level:        {}", config.effective_log_level());
    println!("  Log format:       {}", config.log_format);
    println!();
}

fn render_dashboard(dashboard: &Dashboard) {
    println!("{}", "📊 Dashboard".bright_blue().bold());
    println!();
    println!(
        "  Teachers:    {}",
        dashboard.totals.teachers.to_string().bright_green().bold()
    );
    println!(
        "  Students:    {}",
        dashboard.totals.students.to_string().bright_green().bold()
    );
    println!(
        "  Courses:     {}",
        dashboard.totals.courses.to_string().bright_green().bold()
    );
    println!(
        "  Enrollments: {}",
        dashboard.totals.enrollments.to_string().bright_green().bold()
    );
    println!();

    println!("{}", "🏆 Most popular courses".bright_blue().bold());
    if dashboard.popular_courses.is_empty() {
        println!("{}", "  No courses yet".yellow());
    } else {
        println!(
            "  {:<4} {:<30} {:<25} {:>8}",
            "#".bright_white().bold(),
            "Course".bright_white().bold(),
            "Teacher".bright_white().bold(),
            "Students".bright_white().bold()
        );
        println!("  {}", "─".repeat(70).bright_black());
        for (rank, popular) in dashboard.popular_courses.iter().enumerate() {
            println!(
                "  {:<4} {:<30} {:<25} {:>8}",
                (rank + 1).to_string().bright_black(),
                popular.course.name.cyan(),
                teacher_label(&popular.teacher_name),
                popular.enrollment_count.to_string().bright_green()
            );
        }
    }
    println!();

    println!("{}", "👩‍🏫 Courses per teacher".bright_blue().bold());
    if dashboard.teacher_loads.is_empty() {
        println!("{}", "  No teachers yet".yellow());
    } else {
        for load in &dashboard.teacher_loads {
            println!("{}", teacher_load_line(load));
        }
    }
    println!();
}

fn teacher_load_line(load: &TeacherLoad) -> String {
    format!(
        "  {:<30} {:<25} {}",
        load.teacher.name.cyan(),
        load.teacher.specialty.bright_black(),
        load.course_count.to_string().bright_green()
    )
}

fn teacher_label(name: &str) -> ColoredString {
    if name == NO_TEACHER {
        name.bright_black().italic()
    } else {
        name.normal()
    }
}

fn render_total(count: usize) {
    println!();
    println!("  Total: {}", count.to_string().bright_white().bold());
    println!();
}

fn render_teachers(rows: &[Teacher]) {
    println!("{}", "👩‍🏫 Teachers".bright_blue().bold());
    println!();

    if rows.is_empty() {
        println!("{}", "  No teachers found".yellow());
        return;
    }

    println!(
        "  {:<6} {:<30} {:<30}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Specialty".bright_white().bold()
    );
    println!("  {}", "─".repeat(68).bright_black());
    for teacher in rows {
        println!(
            "  {:<6} {:<30} {:<30}",
            teacher.id.to_string().bright_black(),
            teacher.name.cyan(),
            teacher.specialty
        );
    }
    render_total(rows.len());
}

fn render_students(rows: &[StudentOverview]) {
    println!("{}", "🎓 Students".bright_blue().bold());
    println!();

    if rows.is_empty() {
        println!("{}", "  No students found".yellow());
        return;
    }

    println!(
        "  {:<6} {:<25} {:<30} {:<12} {:>7}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Registered".bright_white().bold(),
        "Courses".bright_white().bold()
    );
    println!("  {}", "─".repeat(84).bright_black());
    for row in rows {
        println!(
            "  {:<6} {:<25} {:<30} {:<12} {:>7}",
            row.student.id.to_string().bright_black(),
            row.student.name.cyan(),
            row.student.email,
            format_date(row.student.registration_date).bright_black(),
            row.course_count.to_string().bright_green()
        );
    }
    render_total(rows.len());
}

fn render_courses(rows: &[CourseOverview]) {
    println!("{}", "📚 Courses".bright_blue().bold());
    println!();

    if rows.is_empty() {
        println!("{}", "  No courses found".yellow());
        return;
    }

    println!(
        "  {:<6} {:<30} {:<25} {:>8}",
        "ID".bright_white().bold(),
        "Course".bright_white().bold(),
        "Teacher".bright_white().bold(),
        "Students".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());
    for row in rows {
        println!(
            "  {:<6} {:<30} {:<25} {:>8}",
            row.course.id.to_string().bright_black(),
            row.course.name.cyan(),
            teacher_label(&row.teacher_name),
            row.student_count.to_string().bright_green()
        );
    }
    render_total(rows.len());
}

fn render_enrollments(rows: &[EnrollmentDetail]) {
    println!("{}", "📝 Enrollments".bright_blue().bold());
    println!();

    if rows.is_empty() {
        println!("{}", "  No enrollments found".yellow());
        return;
    }

    println!(
        "  {:<6} {:<25} {:<25} {:<25} {:<12}",
        "ID".bright_white().bold(),
        "Student".bright_white().bold(),
        "Course".bright_white().bold(),
        "Teacher".bright_white().bold(),
        "Date".bright_white().bold()
    );
    println!("  {}", "─".repeat(96).bright_black());
    for row in rows {
        let student = if row.student.is_some() {
            row.student_name.cyan()
        } else {
            row.student_name.red()
        };
        let course = if row.course.is_some() {
            row.course_name.normal()
        } else {
            row.course_name.red()
        };
        println!(
            "  {:<6} {:<25} {:<25} {:<25} {:<12}",
            row.enrollment.id.to_string().bright_black(),
            student,
            course,
            teacher_label(&row.teacher_name),
            format_date(row.enrollment.enrollment_date).bright_black()
        );
    }
    render_total(rows.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_admin::config::ResourcePaths;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn shell_for(server: &MockServer) -> Shell {
        let config = Config {
            base_url: server.uri(),
            api_key: "anon-key-for-tests".to_string(),
            auth_token: "jwt-token-for-tests".to_string(),
            timeout_ms: 2_000,
            debug: false,
            refresh_interval_ms: 0,
            top_courses: 5,
            paths: ResourcePaths::default(),
            log_level: "info".to_string(),
            log_format: "json".to_string(),
        };
        Shell::new(&config, Arc::new(TracingNotifier::new())).unwrap()
    }

    #[tokio::test]
    async fn test_delete_still_sent_when_record_cannot_be_shown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teachers/7"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/teachers"))
            .and(query_param("id_teacher", "eq.7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let shell = shell_for(&server);
        let describe = |t: &Teacher| t.name.clone();
        let result = delete_record(&shell, &shell.catalog.teachers, 7, true, describe).await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_teacher_load_line_shows_specialty() {
        let load = TeacherLoad {
            teacher: Teacher::new(1, "Marta Ruiz", "Mathematics"),
            course_count: 3,
        };

        let line = teacher_load_line(&load);

        assert!(line.contains("Marta Ruiz"));
        assert!(line.contains("Mathematics"));
        assert!(line.contains('3'));
    }

    #[test]
    fn test_missing_date_renders_blank() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 2, 1)), "2025-02-01");
    }
}
