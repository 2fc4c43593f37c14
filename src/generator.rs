//! Runs a catalog through the composer and emitter into a sink.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::catalog::{AssetCatalog, AssetEntry, GeneratorKind};
use crate::composer::TextureComposer;
use crate::descriptor::DescriptorEmitter;
use crate::error::Result;
use crate::sink::{DescriptorSink, TextureSink, WriteOutcome};
use crate::style::Theme;

/// Paths touched by a descriptor pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorReport {
    pub created: Vec<PathBuf>,
    /// Descriptors that already existed and were left alone.
    pub skipped: Vec<PathBuf>,
}

/// Everything a full run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub textures: Vec<PathBuf>,
    pub descriptors: DescriptorReport,
}

/// Generates every asset in a catalog.
///
/// The catalog is expected to be valid; [`AssetCatalog::from_json`] and
/// [`AssetCatalog::validate`] check that. The first configuration error stops
/// the run.
#[derive(Debug)]
pub struct Generator<'a> {
    catalog: &'a AssetCatalog,
    composer: TextureComposer,
    emitter: DescriptorEmitter,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a AssetCatalog, theme: Theme) -> Self {
        Self {
            catalog,
            composer: TextureComposer::new(theme),
            emitter: DescriptorEmitter::new(catalog.namespace.clone()),
        }
    }

    /// Renders and stores every texture in the catalog.
    pub fn generate_textures<S: TextureSink + ?Sized>(&self, sink: &mut S) -> Result<Vec<PathBuf>> {
        self.write_textures(sink, |_| true)
    }

    /// Renders and stores item and block icons only.
    pub fn generate_icons<S: TextureSink + ?Sized>(&self, sink: &mut S) -> Result<Vec<PathBuf>> {
        self.write_textures(sink, |entry| entry.generator() == GeneratorKind::Icon)
    }

    /// Renders and stores GUI screens only.
    pub fn generate_panels<S: TextureSink + ?Sized>(&self, sink: &mut S) -> Result<Vec<PathBuf>> {
        self.write_textures(sink, |entry| entry.generator() == GeneratorKind::Panel)
    }

    fn write_textures<S, F>(&self, sink: &mut S, include: F) -> Result<Vec<PathBuf>>
    where
        S: TextureSink + ?Sized,
        F: Fn(&AssetEntry) -> bool,
    {
        let mut written = Vec::new();
        for entry in self.catalog.textures.iter().filter(|entry| include(entry)) {
            let texture = self.composer.compose(entry)?;
            let path = sink.put_texture(&texture)?;
            info!(name = %entry.name, path = %path.display(), "wrote texture");
            written.push(path);
        }
        info!(count = written.len(), theme = %self.composer.theme(), "textures generated");
        Ok(written)
    }

    /// Creates descriptors that don't exist yet.
    pub fn generate_descriptors<S: DescriptorSink + ?Sized>(&self, sink: &mut S) -> Result<DescriptorReport> {
        let mut report = DescriptorReport::default();
        for entry in &self.catalog.descriptors {
            let descriptor = self.emitter.describe_with(&entry.name, entry.model.as_deref());
            match sink.create_descriptor(&entry.name, &descriptor)? {
                WriteOutcome::Created(path) => {
                    info!(name = %entry.name, path = %path.display(), "created descriptor");
                    report.created.push(path);
                }
                WriteOutcome::Skipped(path) => {
                    debug!(name = %entry.name, path = %path.display(), "descriptor exists, skipping");
                    report.skipped.push(path);
                }
            }
        }
        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "descriptors generated"
        );
        Ok(report)
    }

    /// Generates textures, then descriptors.
    pub fn run<S: TextureSink + DescriptorSink + ?Sized>(&self, sink: &mut S) -> Result<GenerationReport> {
        Ok(GenerationReport {
            textures: self.generate_textures(sink)?,
            descriptors: self.generate_descriptors(sink)?,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
