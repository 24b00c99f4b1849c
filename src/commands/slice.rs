use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use fs_err as fs;
use gridcut::GridSlicer;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::{
    commands::{project_path, read_config_or_default},
    data::{Config, Manifest, SheetImport, SheetManifest},
    import_sink::{DryRunImportSink, ImportSink, SidecarImportSink},
    options::{GlobalOptions, SliceOptions, SliceTarget},
    raster::read_png_dimensions,
    sheet_name::SheetName,
    size_hint::size_hint_for_path,
};

pub fn slice(_global: GlobalOptions, options: SliceOptions) -> anyhow::Result<()> {
    let project_path = project_path(options.project_path)?;
    let mut session = SliceSession::new(&project_path)?;

    session.discover_sheets()?;

    let summary = match options.target {
        SliceTarget::Sidecar => {
            let mut sink = SidecarImportSink::new(session.config.staging_path());
            session.slice_all(&mut sink, options.force)
        }
        SliceTarget::DryRun => session.slice_all(&mut DryRunImportSink, options.force),
    };

    if options.target == SliceTarget::Sidecar {
        session.write_manifest()?;
    }

    summary.into_result()
}

/// Holds all of the state for a single run of the slice command.
struct SliceSession {
    config: Config,

    /// The manifest as of the start of this run.
    original_manifest: Manifest,

    /// The manifest this run will leave behind. Sheets that are no longer in
    /// the staging folder drop out of it.
    manifest: Manifest,

    /// Every sheet found in the staging folder, in name order.
    sheets: BTreeMap<SheetName, PathBuf>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct SliceSummary {
    sliced: usize,
    unchanged: usize,
    empty: usize,
    failed: usize,
}

impl SliceSummary {
    fn into_result(self) -> anyhow::Result<()> {
        log::info!(
            "Sliced {} sheets ({} unchanged, {} with no slices, {} failed)",
            self.sliced,
            self.unchanged,
            self.empty,
            self.failed
        );

        if self.failed > 0 {
            bail!(
                "{} of {} sheets could not be sliced",
                self.failed,
                self.sliced + self.unchanged + self.empty + self.failed
            );
        }

        Ok(())
    }
}

enum SheetOutcome {
    Sliced { slices: usize },
    Unchanged,
}

impl SliceSession {
    fn new(project_path: &Path) -> anyhow::Result<Self> {
        log::trace!("Starting new slice session");

        let config = read_config_or_default(project_path)?;

        log::trace!("Starting from config \"{}\"", config.name);

        let original_manifest = match Manifest::read_from_folder(config.folder()) {
            Ok(manifest) => manifest,
            Err(err) if err.is_not_found() => Manifest::default(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            config,
            original_manifest,
            manifest: Manifest::default(),
            sheets: BTreeMap::new(),
        })
    }

    /// Find every file in the staging folder matched by the config's inputs
    /// glob.
    fn discover_sheets(&mut self) -> anyhow::Result<()> {
        let staging_path = self.config.staging_path();
        let search_root = self.config.inputs.search_root(&staging_path);

        if !search_root.exists() {
            log::warn!("No sheets found in {}", search_root.display());
            return Ok(());
        }

        log::trace!(
            "Searching for sheets in '{}' matching '{}'",
            search_root.display(),
            self.config.inputs
        );

        for entry in WalkDir::new(&search_root) {
            let entry = entry?;

            if !entry.file_type().is_file() || !is_sheet_path(entry.path()) {
                continue;
            }

            let name = match SheetName::from_paths(&staging_path, entry.path()) {
                Some(name) => name,
                None => continue,
            };

            if self.config.inputs.matches(name.as_ref()) {
                log::trace!("Found sheet {}", name);
                self.sheets.insert(name, entry.into_path());
            }
        }

        if self.sheets.is_empty() {
            log::warn!("No sheets found in {}", staging_path.display());
        }

        Ok(())
    }

    fn slice_all<S: ImportSink>(&mut self, sink: &mut S, force: bool) -> SliceSummary {
        let mut summary = SliceSummary::default();

        let progress = ProgressBar::new(self.sheets.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar().template("{bar:40} {pos}/{len} sheets {wide_msg}"),
        );

        for (name, path) in &self.sheets {
            progress.set_message(name.to_string());

            match self.slice_sheet(sink, name, path, force) {
                Ok((outcome, record)) => {
                    match outcome {
                        SheetOutcome::Sliced { slices: 0 } => summary.empty += 1,
                        SheetOutcome::Sliced { .. } => summary.sliced += 1,
                        SheetOutcome::Unchanged => summary.unchanged += 1,
                    }

                    self.manifest.sheets.insert(name.clone(), record);
                }
                Err(err) => {
                    log::error!("Couldn't slice {}: {:#}", name, err);
                    summary.failed += 1;

                    // Keep the last good record so the sheet is retried next
                    // time instead of forgotten.
                    if let Some(previous) = self.original_manifest.sheets.get(name) {
                        self.manifest.sheets.insert(name.clone(), previous.clone());
                    }
                }
            }

            progress.inc(1);
        }

        progress.finish_and_clear();

        summary
    }

    fn slice_sheet<S: ImportSink>(
        &self,
        sink: &mut S,
        name: &SheetName,
        path: &Path,
        force: bool,
    ) -> anyhow::Result<(SheetOutcome, SheetManifest)> {
        let contents = fs::read(path)?;
        let sheet = read_png_dimensions(contents.as_slice())
            .with_context(|| format!("couldn't read image header of {}", path.display()))?;

        let size_hint = size_hint_for_path(path);
        if let Some((width, height)) = size_hint {
            log::debug!("{} asks for {}x{} slices", name, width, height);
        }

        let slice_config = self.config.slice.to_slice_config(size_hint)?;
        let slicer = GridSlicer::new(&slice_config)?;
        let (columns, rows) = slicer.grid_size(sheet);

        let record = SheetManifest::new(
            &contents,
            slicer.config(),
            columns as usize * rows as usize,
        );

        if !force && self.original_manifest.is_unchanged(name, &record) {
            log::debug!("{} is unchanged, skipping", name);
            return Ok((SheetOutcome::Unchanged, record));
        }

        let slices = slicer.slice(sheet);

        if slices.is_empty() {
            let (slice_width, slice_height) = slicer.config().slice_size;
            log::warn!(
                "{} ({}) is smaller than one {}x{} slice, no slices were produced",
                name,
                sheet,
                slice_width,
                slice_height
            );
        }

        let slice_count = slices.len();
        let import = SheetImport::new(
            name.clone(),
            slicer.config().sampling_mode,
            slicer.config().pixels_per_unit,
            slices,
        );

        sink.apply(&import)?;

        if sink.is_persistent() {
            log::info!("Sliced {} into {} slices", name, slice_count);
        }

        let outcome = SheetOutcome::Sliced {
            slices: slice_count,
        };

        Ok((outcome, record))
    }

    fn write_manifest(&self) -> anyhow::Result<()> {
        self.manifest.write_to_folder(self.config.folder())?;

        Ok(())
    }
}

fn is_sheet_path(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("png"),
        None => false,
    }
}
