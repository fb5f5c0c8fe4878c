//! Rendering to the console, a file, or both at once
//!
//! The file is written by a task spawned into a rayon scope while the
//! console (if requested) renders in the scope body. The scope end is the
//! join point. The two paths list the filesystem independently and share
//! nothing except the slot the file task leaves its result in.

use std::any::Any;
use std::fs::File;
use std::io::BufWriter;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use rayon::{Scope, ThreadPool, ThreadPoolBuilder};

use crate::error::DirtreeError;
use crate::output::{OutputConfig, PlainFormatter, StreamingFormatter};
use crate::tree::{StreamingOutput, TreeWalker, WalkStats, WalkerConfig};

/// Suffix appended to the root's name to form the output filename.
pub const OUTPUT_FILE_SUFFIX: &str = "_tree.txt";

/// Where a rendering goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    ConsoleOnly,
    FileOnly,
    Both,
}

impl OutputMode {
    pub fn writes_console(self) -> bool {
        matches!(self, OutputMode::ConsoleOnly | OutputMode::Both)
    }

    pub fn writes_file(self) -> bool {
        matches!(self, OutputMode::FileOnly | OutputMode::Both)
    }
}

/// Everything needed for one run.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Validated root directory.
    pub root: PathBuf,
    pub mode: OutputMode,
    /// Only used when `mode` writes a file.
    pub output_path: PathBuf,
    pub walker: WalkerConfig,
    pub output: OutputConfig,
}

impl RenderRequest {
    /// Request whose output file is named after the root, relative to the
    /// current directory.
    pub fn new(root: PathBuf, mode: OutputMode, walker: WalkerConfig, output: OutputConfig) -> Self {
        let output_path = PathBuf::from(output_file_name(&root));
        Self {
            root,
            mode,
            output_path,
            walker,
            output,
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// A successfully written tree file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub stats: WalkStats,
}

/// Result of each destination. `None` means the destination wasn't requested.
#[derive(Debug)]
pub struct RunOutcome {
    pub console: Option<Result<WalkStats, DirtreeError>>,
    pub file: Option<Result<FileReport, DirtreeError>>,
}

impl RunOutcome {
    /// Line reporting how the file task ended, if there was one.
    pub fn file_message(&self) -> Option<String> {
        self.file.as_ref().map(|result| match result {
            Ok(report) => format!(
                "Directory tree successfully written to: {}",
                report.path.display()
            ),
            Err(e) => e.to_string(),
        })
    }
}

/// Check that `path` exists and is a directory.
pub fn validate_root(path: &Path) -> Result<(), DirtreeError> {
    if !path.exists() {
        return Err(DirtreeError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(DirtreeError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// `<name>_tree.txt`, where name is the root's last component.
///
/// Paths like `.` are resolved first so the file isn't named `._tree.txt`;
/// the filesystem root becomes `root_tree.txt`.
pub fn output_file_name(root: &Path) -> String {
    let stem = root
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|s| s.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| "root".to_string());
    format!("{}{}", stem, OUTPUT_FILE_SUFFIX)
}

/// Render to the destinations `request.mode` names, with the console on stdout.
pub fn run(request: &RenderRequest) -> RunOutcome {
    let mut console = StreamingFormatter::new(request.output);
    run_with_console(request, &mut console)
}

/// Same as [`run`], with the console destination supplied by the caller.
pub fn run_with_console<O: StreamingOutput + Send>(
    request: &RenderRequest,
    console: &mut O,
) -> RunOutcome {
    let walker = TreeWalker::new(request.walker);

    if !request.mode.writes_file() {
        let stats = render_console(&walker, &request.root, console);
        return RunOutcome {
            console: Some(stats),
            file: None,
        };
    }

    let writes_console = request.mode.writes_console();
    log::debug!("file task started: {}", request.output_path.display());
    let (console_result, file_result) = with_file_task(
        || write_tree_file(&walker, &request.root, &request.output_path),
        || writes_console.then(|| render_console(&walker, &request.root, console)),
    );

    if let Some(Ok(stats)) = &console_result {
        log::debug!(
            "console: {} directories, {} files",
            stats.directories,
            stats.files
        );
    }

    RunOutcome {
        console: console_result,
        file: Some(file_result),
    }
}

fn render_console<O: StreamingOutput>(
    walker: &TreeWalker,
    root: &Path,
    console: &mut O,
) -> Result<WalkStats, DirtreeError> {
    walker.walk(root, console).map_err(DirtreeError::Console)
}

/// Spawn `file_task`, run `foreground` meanwhile, and wait for both.
fn with_file_task<T, J, F>(file_task: J, foreground: F) -> (T, Result<FileReport, DirtreeError>)
where
    J: FnOnce() -> Result<FileReport, DirtreeError> + Send,
    F: FnOnce() -> T + Send,
    T: Send,
{
    // Written once by the task, read once after the scope has joined
    let mut file_slot: Option<Result<FileReport, DirtreeError>> = None;
    let slot = &mut file_slot;
    let pool = task_pool();

    let foreground_result = in_scope(pool.as_ref(), move |s| {
        s.spawn(move |_| {
            *slot = Some(run_guarded(file_task));
        });
        foreground()
    });

    let file_result = file_slot.unwrap_or_else(|| {
        Err(DirtreeError::TaskInterrupted(
            "file task finished without a result".to_string(),
        ))
    });
    log::debug!("file task joined, ok = {}", file_result.is_ok());

    (foreground_result, file_result)
}

/// Two workers: one for the console, one for the file.
fn task_pool() -> Option<ThreadPool> {
    match ThreadPoolBuilder::new()
        .num_threads(2)
        .thread_name(|i| format!("dirtree-worker-{}", i))
        .build()
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            // Fall back to rayon's global pool if a dedicated one can't be built
            log::warn!("using global thread pool: {}", e);
            None
        }
    }
}

fn in_scope<'scope, OP, R>(pool: Option<&ThreadPool>, op: OP) -> R
where
    OP: FnOnce(&Scope<'scope>) -> R + Send,
    R: Send,
{
    match pool {
        Some(pool) => pool.scope(op),
        None => rayon::scope(op),
    }
}

/// Run the file task, turning a panic into a reported error.
fn run_guarded<J>(file_task: J) -> Result<FileReport, DirtreeError>
where
    J: FnOnce() -> Result<FileReport, DirtreeError>,
{
    panic::catch_unwind(AssertUnwindSafe(file_task)).unwrap_or_else(|payload| {
        Err(DirtreeError::TaskInterrupted(panic_message(
            payload.as_ref(),
        )))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string())
}

/// Create (or truncate) `path` and write the full rendering of `root` to it.
pub fn write_tree_file(
    walker: &TreeWalker,
    root: &Path,
    path: &Path,
) -> Result<FileReport, DirtreeError> {
    let file = File::create(path).map_err(|source| DirtreeError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut formatter = PlainFormatter::new(BufWriter::new(file));
    let stats = walker
        .walk(root, &mut formatter)
        .map_err(|source| DirtreeError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(FileReport {
        path: path.to_path_buf(),
        stats,
    })
}
