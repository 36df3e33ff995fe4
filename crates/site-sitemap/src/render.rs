//! Sitemap XML rendering.

use std::io::Write;

use chrono::SecondsFormat;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entry::SitemapEntry;
use crate::error::{Error, Result};

/// Namespace of the sitemap protocol.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render entries as a pretty-printed sitemap document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(Error::xml)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer
        .write_event(Event::Start(urlset))
        .map_err(Error::xml)?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(Error::xml)?;
        write_element(&mut writer, "loc", &entry.loc)?;
        write_element(
            &mut writer,
            "lastmod",
            &entry.lastmod.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_element(&mut writer, "priority", &format!("{:.2}", entry.priority))?;
        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(Error::xml)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(Error::xml)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(Error::xml)?;
    xml.push('\n');
    Ok(xml)
}

fn write_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(Error::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(Error::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(Error::xml)?;
    Ok(())
}
