//! TypeScript declaration generation for SObjects.
//!
//! [`TypingGenerator`] turns each object's field declarations into a
//! `<Object>.d.ts` file of module stubs under `typings/lwc/sobjects`. Objects
//! are processed concurrently, up to a configurable limit, with no ordering
//! guarantee between them.

pub mod mapper;
pub mod render;
pub mod writer;

use std::num::NonZeroUsize;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::declaration::{DeclarationGenerator, DescribeDeclarationGenerator};
use crate::error::TypingsError;
use crate::fs_helpers::ensure_dir;
use crate::schema::{SObject, SObjectDefinition, SObjectRefreshOutput};

pub use mapper::{TypingType, convert_type};
pub use render::{convert_declaration, convert_declarations};
pub use writer::{TYPESCRIPT_TYPE_EXT, write_typing};

/// Path segments from the project root to the typings folder.
pub const TYPING_PATH: [&str; 3] = ["typings", "lwc", "sobjects"];

/// Default number of objects written at once.
pub const DEFAULT_MAX_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(limit) => limit,
    None => NonZeroUsize::MIN,
};

/// Returns the typings folder for a project root.
#[must_use]
pub fn typings_folder(sfdx_path: &Utf8Path) -> Utf8PathBuf {
    TYPING_PATH
        .iter()
        .fold(sfdx_path.to_path_buf(), |path, segment| path.join(segment))
}

/// Files written by a generation run, sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    files: Vec<Utf8PathBuf>,
}

impl GenerationSummary {
    fn new(mut files: Vec<Utf8PathBuf>) -> Self {
        files.sort();
        Self { files }
    }

    /// Returns the written file paths.
    #[must_use]
    pub fn files(&self) -> &[Utf8PathBuf] {
        &self.files
    }

    /// Returns the number of files written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` when nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Generates declaration files from SObject describe metadata.
#[derive(Debug, Clone)]
pub struct TypingGenerator<G = DescribeDeclarationGenerator> {
    decl_generator: G,
    max_concurrency: NonZeroUsize,
}

impl TypingGenerator {
    /// Creates a generator backed by [`DescribeDeclarationGenerator`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(DescribeDeclarationGenerator)
    }
}

impl Default for TypingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: DeclarationGenerator> TypingGenerator<G> {
    /// Creates a generator that obtains definitions from `decl_generator`.
    pub const fn with_generator(decl_generator: G) -> Self {
        Self {
            decl_generator,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Limits how many objects are written at once.
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: NonZeroUsize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Generates typings for every standard and custom object in `output`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while writing any object.
    pub async fn generate(
        &self,
        output: &SObjectRefreshOutput,
    ) -> Result<GenerationSummary, TypingsError> {
        let folder = typings_folder(output.sfdx_path());
        self.generate_types(output.all(), &folder).await
    }

    /// Generates typings for `sobjects` into `target_folder`.
    ///
    /// Objects without a name are skipped. Every named object is attempted,
    /// at most `max_concurrency` at a time, even after one of them fails. The
    /// call then returns the first error observed; files written by the other
    /// objects stay in place.
    ///
    /// # Errors
    ///
    /// Returns `TypingsError::Io` when the folder or any file cannot be
    /// written, or `TypingsError::Join` when a write task panics.
    pub async fn generate_types<'a, I>(
        &self,
        sobjects: I,
        target_folder: &Utf8Path,
    ) -> Result<GenerationSummary, TypingsError>
    where
        I: IntoIterator<Item = &'a SObject>,
    {
        let dir = open_target(target_folder.to_path_buf()).await?;

        let jobs = sobjects
            .into_iter()
            .filter(|sobject| {
                let named = sobject.name().is_some();
                if !named {
                    debug!(label = ?sobject.label, "skipping SObject without a name");
                }
                named
            })
            .map(|sobject| {
                let definition = self.decl_generator.generate_sobject_definition(sobject);
                write_definition(Arc::clone(&dir), target_folder.to_path_buf(), definition)
            });

        let results: Vec<Result<Utf8PathBuf, TypingsError>> = stream::iter(jobs)
            .buffer_unordered(self.max_concurrency.get())
            .collect()
            .await;
        let files = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        info!(count = files.len(), folder = %target_folder, "generated SObject typings");
        Ok(GenerationSummary::new(files))
    }

    /// Writes the declaration file for one definition and returns its path.
    ///
    /// # Errors
    ///
    /// Returns `TypingsError::Io` when the folder or file cannot be written.
    pub async fn generate_type(
        &self,
        folder_path: &Utf8Path,
        definition: SObjectDefinition,
    ) -> Result<Utf8PathBuf, TypingsError> {
        let dir = open_target(folder_path.to_path_buf()).await?;
        write_definition(dir, folder_path.to_path_buf(), definition).await
    }
}

async fn open_target(folder: Utf8PathBuf) -> Result<Arc<Dir>, TypingsError> {
    let dir = tokio::task::spawn_blocking(move || ensure_dir(&folder)).await??;
    Ok(Arc::new(dir))
}

async fn write_definition(
    dir: Arc<Dir>,
    root: Utf8PathBuf,
    definition: SObjectDefinition,
) -> Result<Utf8PathBuf, TypingsError> {
    tokio::task::spawn_blocking(move || -> Result<Utf8PathBuf, TypingsError> {
        let content = convert_declarations(&definition);
        let path = writer::write_typing_in(&dir, &root, &definition.name, &content)?;
        debug!(path = %path, fields = definition.fields.len(), "wrote typing");
        Ok(path)
    })
    .await?
}
