//! Layout renderers: single-cell containers and side-by-side columns.

use crate::{
    context::RenderContext,
    errors::RendererError,
    model::Element,
    renderer::ElementRenderer,
    style::css_number,
};

const LAYOUT_TABLE: &str =
    "<table role=\"presentation\" width=\"100%\" cellspacing=\"0\" cellpadding=\"0\" border=\"0\"";

/// Render `children` in order, one level below `ctx`.
pub fn render_children<R>(
    renderer: &R,
    children: &[Element],
    ctx: &RenderContext,
) -> Result<String, RendererError>
where
    R: ElementRenderer + ?Sized,
{
    let child_ctx = ctx.descend()?;
    children
        .iter()
        .map(|child| renderer.render_node(child, &child_ctx))
        .collect()
}

/// Full-width table with one cell holding every child. Also used for
/// unrecognized element types that carry children.
pub fn render_container<R>(
    renderer: &R,
    element: &Element,
    ctx: &RenderContext,
) -> Result<String, RendererError>
where
    R: ElementRenderer + ?Sized,
{
    let children = element.children.as_deref().unwrap_or_default();
    let body = render_children(renderer, children, ctx)?;
    Ok(format!(
        "{LAYOUT_TABLE}><tr><td style=\"{}\">{body}</td></tr></table>",
        renderer.styles().serialize(&element.styles)
    ))
}

/// One row, one top-aligned cell per column, widths split evenly.
///
/// Columns come from `columns`, falling back to `children`. A column that
/// carries children is a wrapper whose styles go on its cell; a column
/// without children but with a type is rendered as the cell's only content.
/// An element without any column renders nothing.
pub fn render_columns<R>(
    renderer: &R,
    element: &Element,
    ctx: &RenderContext,
) -> Result<String, RendererError>
where
    R: ElementRenderer + ?Sized,
{
    let columns = element
        .columns
        .as_deref()
        .or(element.children.as_deref())
        .unwrap_or_default();
    if columns.is_empty() {
        tracing::warn!(depth = ctx.depth, "columns element has no columns, skipping");
        return Ok(String::new());
    }

    let width = css_number(100.0 / columns.len() as f64);
    let column_ctx = ctx.descend()?;
    let styles = renderer.styles();

    let mut cells = String::new();
    for column in columns {
        let (style, body) = match &column.children {
            Some(children) => (
                styles.serialize(&column.styles),
                render_children(renderer, children, &column_ctx)?,
            ),
            None if column.kind.is_some() => {
                (String::new(), renderer.render_node(column, &column_ctx)?)
            }
            None => (styles.serialize(&column.styles), String::new()),
        };
        cells.push_str(&format!(
            "<td width=\"{width}%\" valign=\"top\" style=\"{style}\">{body}</td>"
        ));
    }

    Ok(format!(
        "{LAYOUT_TABLE} style=\"{}\"><tr>{cells}</tr></table>",
        styles.serialize(&element.styles)
    ))
}
