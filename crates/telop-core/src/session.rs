use std::path::{Path, PathBuf};

use crate::{export_png, render, Config, RenderParameters, RenderedImage, Result, SourceImage};

/// Holds the form state: the uploaded image, the current parameters and the
/// last rendered result.
///
/// Every accepted change replaces state wholesale and re-renders; rejected
/// changes leave everything as it was.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
    source: Option<SourceImage>,
    rendered: Option<RenderedImage>,
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        config.params.validate()?;
        Ok(Self {
            config,
            source: None,
            rendered: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn params(&self) -> &RenderParameters {
        &self.config.params
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn rendered(&self) -> Option<&RenderedImage> {
        self.rendered.as_ref()
    }

    /// Replaces the uploaded image. `None` (nothing picked) changes nothing.
    pub fn select_image(&mut self, image: Option<SourceImage>) -> Result<Option<&RenderedImage>> {
        let Some(image) = image else {
            return Ok(self.rendered.as_ref());
        };
        let rendered = render(&image, &self.config)?;
        self.source = Some(image);
        self.rendered = Some(rendered);
        Ok(self.rendered.as_ref())
    }

    pub fn set_params(&mut self, params: RenderParameters) -> Result<Option<&RenderedImage>> {
        params.validate()?;
        let mut config = self.config.clone();
        config.params = params;
        let rendered = match &self.source {
            Some(source) => Some(render(source, &config)?),
            None => None,
        };
        self.config = config;
        if rendered.is_some() {
            self.rendered = rendered;
        }
        Ok(self.rendered.as_ref())
    }

    pub fn update<F>(&mut self, edit: F) -> Result<Option<&RenderedImage>>
    where
        F: FnOnce(RenderParameters) -> RenderParameters,
    {
        let params = edit(self.config.params.clone());
        self.set_params(params)
    }

    /// Re-renders the current image, or does nothing when none is loaded.
    pub fn render(&mut self) -> Result<Option<&RenderedImage>> {
        let Some(source) = &self.source else {
            return Ok(None);
        };
        self.rendered = Some(render(source, &self.config)?);
        Ok(self.rendered.as_ref())
    }

    /// Exports the last render into `dir`; `None` when nothing was rendered.
    pub fn download(&self, dir: &Path) -> Result<Option<PathBuf>> {
        match &self.rendered {
            Some(rendered) => export_png(rendered, dir).map(Some),
            None => Ok(None),
        }
    }
}
