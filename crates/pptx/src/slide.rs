//! Slide part XML generation.
//!
//! Each slide becomes one `ppt/slides/slideN.xml` part: an optional
//! background fill followed by the shape tree, with shapes emitted in
//! insertion order. Shape id 1 is reserved for the group shape, so user
//! shapes are numbered from 2.

use deck_core::{Align, Fill, Geometry, Paragraph, Result, Run, Shape, Slide, TextFrame};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

use crate::template::XML_DECL;

/// Generate the slide part XML for one slide.
pub(crate) fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(8192);

    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
    );
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<p:cSld>");

    // Background must come before the shape tree.
    if let Some(color) = slide.background {
        write!(
            xml,
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
            color.hex()
        )?;
    }

    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    for (index, shape) in slide.shapes.iter().enumerate() {
        write_shape(&mut xml, shape, index as u32 + 2)?;
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}

/// Write one `<p:sp>` element.
fn write_shape(xml: &mut String, shape: &Shape, id: u32) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        id,
        shape.geometry.label(),
        id
    )?;
    match shape.geometry {
        Geometry::TextBox => xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#),
        _ => xml.push_str("<p:cNvSpPr/>"),
    }
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(
        xml,
        r#"<a:off x="{}" y="{}"/>"#,
        shape.frame.left.raw(),
        shape.frame.top.raw()
    )?;
    write!(
        xml,
        r#"<a:ext cx="{}" cy="{}"/>"#,
        shape.frame.width.raw(),
        shape.frame.height.raw()
    )?;
    xml.push_str("</a:xfrm>");

    let preset = match shape.geometry {
        Geometry::RoundedRectangle => "roundRect",
        Geometry::Rectangle | Geometry::TextBox => "rect",
    };
    write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)?;

    if let Some(fill) = &shape.fill {
        write_solid_fill(xml, fill)?;
        // Filled drawing shapes carry no outline.
        xml.push_str("<a:ln><a:noFill/></a:ln>");
    }
    if shape.suppress_shadow {
        xml.push_str("<a:effectLst/>");
    }
    xml.push_str("</p:spPr>");

    if let Some(text) = &shape.text {
        write_text_body(xml, text)?;
    }

    xml.push_str("</p:sp>");
    Ok(())
}

/// Write a `<a:solidFill>` element, including the alpha channel when one
/// has been applied to the fill.
fn write_solid_fill(xml: &mut String, fill: &Fill) -> Result<()> {
    match fill.alpha {
        Some(alpha) => write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"><a:alpha val="{}"/></a:srgbClr></a:solidFill>"#,
            fill.color.hex(),
            alpha
        )?,
        None => write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            fill.color.hex()
        )?,
    }
    Ok(())
}

fn write_text_body(xml: &mut String, text: &TextFrame) -> Result<()> {
    xml.push_str("<p:txBody>");
    if text.word_wrap {
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"/>"#);
    } else {
        xml.push_str(r#"<a:bodyPr wrap="none" rtlCol="0"/>"#);
    }
    xml.push_str("<a:lstStyle/>");

    if text.paragraphs.is_empty() {
        // A text body must contain at least one paragraph.
        xml.push_str("<a:p/>");
    }
    for paragraph in &text.paragraphs {
        write_paragraph(xml, paragraph)?;
    }

    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    let algn = match paragraph.alignment {
        Align::Left => "l",
        Align::Center => "ctr",
        Align::Right => "r",
    };
    match paragraph.space_after {
        // Paragraph spacing is stored in hundredths of a point.
        Some(points) => write!(
            xml,
            r#"<a:pPr algn="{}"><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
            algn,
            (points * 100.0).round() as u32
        )?,
        None => write!(xml, r#"<a:pPr algn="{}"/>"#, algn)?,
    }

    for run in &paragraph.runs {
        write_run(xml, run)?;
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run(xml: &mut String, run: &Run) -> Result<()> {
    // Font size is stored in hundredths of a point.
    write!(
        xml,
        r#"<a:r><a:rPr lang="en-US" sz="{}" dirty="0""#,
        (run.font.size * 100.0).round() as u32
    )?;
    if run.font.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push('>');
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        run.font.color.hex()
    )?;
    if let Some(family) = &run.font.family {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape(family))?;
    }
    xml.push_str("</a:rPr>");
    write!(xml, "<a:t>{}</a:t>", escape(&run.text))?;
    xml.push_str("</a:r>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Color, Font, Frame};
    use quick_xml::events::Event;
    use quick_xml::Reader;

    const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Collect the text content of every `<a:t>` element in slide XML.
    fn run_texts(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);

        let mut texts = Vec::new();
        let mut in_text = false;
        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"a:t" => in_text = true,
                Ok(Event::End(ref e)) if e.name().as_ref() == b"a:t" => in_text = false,
                Ok(Event::Text(ref e)) if in_text => {
                    texts.push(e.unescape().unwrap().to_string());
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("generated XML failed to parse: {}", e),
                _ => {}
            }
        }
        texts
    }

    /// Count occurrences of an element by qualified name.
    fn count_elements(xml: &str, name: &[u8]) -> usize {
        let mut reader = Reader::from_str(xml);
        let mut count = 0;
        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) if e.name().as_ref() == name => {
                    count += 1;
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("generated XML failed to parse: {}", e),
                _ => {}
            }
        }
        count
    }

    #[test]
    fn test_empty_slide_has_group_shape_only() {
        let slide = Slide::new();
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains("<p:spTree>"));
        assert_eq!(count_elements(&xml, b"p:sp"), 0);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = Slide::new();
        slide.set_background(Color::rgb(0x11, 0x11, 0x11));
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="111111"/>"#));
        assert!(xml.find("<p:bg>").unwrap() < xml.find("<p:spTree>").unwrap());
    }

    #[test]
    fn test_shape_ids_start_after_group_shape() {
        let mut slide = Slide::new();
        for _ in 0..3 {
            slide.add_shape(
                Shape::new(Geometry::Rectangle, Frame::from_inches(0.0, 0.0, 1.0, 1.0))
                    .with_fill(GREEN),
            );
        }
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="4" name="Rectangle 4"/>"#));
    }

    #[test]
    fn test_filled_shape_has_no_outline() {
        let mut slide = Slide::new();
        slide.add_shape(
            Shape::new(Geometry::Rectangle, Frame::from_inches(0.0, 0.0, 1.0, 1.0))
                .with_fill(GREEN),
        );
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="00FF00"/></a:solidFill>"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_rounded_panel_geometry_and_shadow() {
        let mut slide = Slide::new();
        slide.add_shape(
            Shape::new(
                Geometry::RoundedRectangle,
                Frame::from_inches(0.8, 1.5, 5.6, 5.3),
            )
            .with_fill(Color::rgb(0x16, 0x21, 0x3E))
            .without_shadow(),
        );
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains("<a:effectLst/></p:spPr>"));
    }

    #[test]
    fn test_alpha_channel_written_inside_color() {
        let mut slide = Slide::new();
        let shape = slide.add_shape(
            Shape::new(
                Geometry::RoundedRectangle,
                Frame::from_inches(0.0, 0.0, 1.0, 1.0),
            )
            .with_fill(Color::rgb(0x16, 0x21, 0x3E)),
        );
        shape.set_fill_alpha(60.0).unwrap();
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<a:srgbClr val="16213E"><a:alpha val="60000"/></a:srgbClr>"#));
    }

    #[test]
    fn test_text_box_marks_tx_box_and_escapes_text() {
        let mut slide = Slide::new();
        let shape = slide.add_shape(Shape::new(
            Geometry::TextBox,
            Frame::from_inches(1.0, 2.8, 11.3, 1.2),
        ));
        let frame = shape.text_frame();
        frame.add_paragraph(
            Paragraph::new()
                .aligned(Align::Center)
                .with_run(Run::new("Phaser <3> & React", Font::new(54.0, WHITE).bold())),
        );
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="5400""#));
        assert!(xml.contains(r#" b="1""#));
        assert_eq!(run_texts(&xml), vec!["Phaser <3> & React"]);
    }

    #[test]
    fn test_paragraph_count_matches_input() {
        let mut slide = Slide::new();
        let shape = slide.add_shape(Shape::new(
            Geometry::TextBox,
            Frame::from_inches(1.2, 2.3, 4.8, 4.0),
        ));
        let frame = shape.text_frame();
        let items = ["first", "second", "third", "fourth"];
        for item in items {
            frame.add_paragraph(
                Paragraph::new()
                    .spaced_after(6.0)
                    .with_run(Run::new("▸ ", Font::new(16.0, GREEN).bold()))
                    .with_run(Run::new(item, Font::new(16.0, WHITE).family("Arial"))),
            );
        }
        let xml = slide_xml(&slide).unwrap();
        assert_eq!(count_elements(&xml, b"a:p"), items.len());
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="600"/></a:spcAft>"#));

        let texts = run_texts(&xml);
        assert_eq!(texts.len(), items.len() * 2);
        assert_eq!(texts[0], "▸ ");
        assert_eq!(texts[1], "first");
        assert_eq!(texts[7], "fourth");
    }

    #[test]
    fn test_word_wrap_controls_body_wrap_attribute() {
        let mut slide = Slide::new();
        let shape = slide.add_shape(Shape::new(
            Geometry::TextBox,
            Frame::from_inches(0.0, 0.0, 1.0, 1.0),
        ));
        shape.text_frame().word_wrap = false;
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"/>"#));
    }
}
