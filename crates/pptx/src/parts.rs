//! Dynamic package parts: content types, presentation, and relationships.
//!
//! These parts vary with the slide count; everything else in the package is
//! a fixed template (see [`crate::template`]).

use deck_core::{Presentation, Result};
use std::fmt::Write as FmtWrite;

use crate::template::XML_DECL;

const RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// `[Content_Types].xml` with one override per slide.
pub(crate) fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
    );
    for number in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            number
        )?;
    }
    xml.push_str(
        r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
    );
    xml.push_str("</Types>");
    Ok(xml)
}

/// `ppt/presentation.xml`: master and slide id lists plus the canvas size.
///
/// Relationship ids must line up with [`presentation_rels_xml`]: the master
/// is `rId1` and slide N is `rId(N+1)`.
pub(crate) fn presentation_xml(prs: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<p:sldMasterIdLst>");
    xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
    xml.push_str("</p:sldMasterIdLst>");

    if !prs.slides.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for index in 0..prs.slide_count() {
            // Slide ids live in a reserved range starting at 256.
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                index + 256,
                index + 2
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        prs.width.raw(),
        prs.height.raw()
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// `ppt/_rels/presentation.xml.rels`.
pub(crate) fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    write!(xml, r#"<Relationships xmlns="{}">"#, RELS_NS)?;

    write!(
        xml,
        r#"<Relationship Id="rId1" Type="{}/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#,
        REL_TYPE_BASE
    )?;
    for number in 1..=slide_count {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{}/slide" Target="slides/slide{}.xml"/>"#,
            number + 1,
            REL_TYPE_BASE,
            number
        )?;
    }

    let mut next = slide_count + 2;
    for (rel, target) in [
        ("presProps", "presProps.xml"),
        ("viewProps", "viewProps.xml"),
        ("theme", "theme/theme1.xml"),
        ("tableStyles", "tableStyles.xml"),
    ] {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{}/{}" Target="{}"/>"#,
            next, REL_TYPE_BASE, rel, target
        )?;
        next += 1;
    }

    xml.push_str("</Relationships>");
    Ok(xml)
}
