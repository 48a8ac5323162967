//! PPTX package assembly.
//!
//! Collects the generated and fixed parts into the OPC directory layout and
//! writes them as a ZIP archive.

use deck_core::{Error, Presentation, Result};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::parts;
use crate::slide;
use crate::template;

/// Writer that serializes a [`Presentation`] into a .pptx package.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize the presentation to a file at `path`, overwriting any
    /// existing file.
    pub fn save(&self, presentation: &Presentation, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write(presentation, BufWriter::new(file))
    }

    /// Serialize the presentation into `writer` as a complete package.
    pub fn write<W: Write + Seek>(&self, presentation: &Presentation, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);

        add_part(
            &mut zip,
            "[Content_Types].xml",
            parts::content_types_xml(presentation.slide_count())?.as_bytes(),
        )?;
        add_part(&mut zip, "_rels/.rels", template::ROOT_RELS.as_bytes())?;
        add_part(
            &mut zip,
            "ppt/presentation.xml",
            parts::presentation_xml(presentation)?.as_bytes(),
        )?;
        add_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            parts::presentation_rels_xml(presentation.slide_count())?.as_bytes(),
        )?;
        add_part(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            template::SLIDE_MASTER.as_bytes(),
        )?;
        add_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            template::SLIDE_MASTER_RELS.as_bytes(),
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            template::SLIDE_LAYOUT.as_bytes(),
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            template::SLIDE_LAYOUT_RELS.as_bytes(),
        )?;

        for (index, s) in presentation.slides.iter().enumerate() {
            let number = index + 1;
            log::debug!("Writing slide {} ({} shapes)", number, s.shape_count());
            let xml = slide::slide_xml(s)?;
            add_part(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", number),
                xml.as_bytes(),
            )?;
            add_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                template::SLIDE_RELS.as_bytes(),
            )?;
        }

        add_part(&mut zip, "ppt/theme/theme1.xml", template::THEME.as_bytes())?;
        add_part(&mut zip, "ppt/presProps.xml", template::PRES_PROPS.as_bytes())?;
        add_part(&mut zip, "ppt/viewProps.xml", template::VIEW_PROPS.as_bytes())?;
        add_part(
            &mut zip,
            "ppt/tableStyles.xml",
            template::TABLE_STYLES.as_bytes(),
        )?;
        add_part(&mut zip, "docProps/core.xml", template::CORE_PROPS.as_bytes())?;
        add_part(&mut zip, "docProps/app.xml", template::APP_PROPS.as_bytes())?;

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finalize archive: {}", e)))?;
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one part into the archive as a deflated entry.
fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, data: &[u8]) -> Result<()> {
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    zip.start_file(name, options)
        .map_err(|e| Error::ZipError(format!("Failed to start entry '{}': {}", name, e)))?;
    zip.write_all(data)?;
    Ok(())
}
