//! Markup parser for SVG documents.
//!
//! This module parses the XML subset found in icon sprites and standalone
//! SVG files into a lightweight [`Element`] tree that borrows from the source
//! text. Comments, CDATA sections, processing instructions, doctype
//! declarations and character data are validated and skipped.
//!
//! The public entry point of the module is [`parse_document`]. Besides plain
//! SVG documents it accepts symbol scripts: JavaScript files that embed the
//! sprite document in a string literal. In that case everything before the
//! first `<svg` and after the matching `</svg>` is ignored, and spans still
//! point into the script.

use winnow::{
    Parser as _,
    ascii::{multispace0, multispace1},
    combinator::{alt, cut_err, opt, peek, preceded, repeat, terminated},
    error::{ContextError, ErrMode},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, take_till, take_until, take_while},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Rich diagnostic information for markup errors.
///
/// Attached to winnow errors via `.context()`; the innermost context wins
/// when the error is converted into a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct MarkupDiagnostic {
    code: ErrorCode,
    message: String,
    help: Option<&'static str>,
    /// The error span covers from `start` to `end`, or to the error position
    /// when `end` is not known.
    start: usize,
    end: Option<usize>,
    /// Where the element being closed was opened.
    opened: Option<Span>,
}

impl MarkupDiagnostic {
    fn new(code: ErrorCode, message: impl Into<String>, start: usize) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
            start,
            end: None,
            opened: None,
        }
    }

    fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

type Input<'src> = LocatingSlice<&'src str>;
type PResult<O> = Result<O, ErrMode<ContextError<MarkupDiagnostic>>>;

/// One attribute of an element, borrowed from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Attribute<'src> {
    pub name: &'src str,
    pub value: &'src str,
    pub span: Span,
}

/// One element of a parsed document, borrowed from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element<'src> {
    pub name: &'src str,
    /// Span of the tag name in the opening tag.
    pub name_span: Span,
    /// Span of the whole element, opening tag to closing tag.
    pub span: Span,
    pub attributes: Vec<Attribute<'src>>,
    pub children: Vec<Element<'src>>,
}

impl<'src> Element<'src> {
    /// Returns the value of an attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&'src str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value)
    }

    /// Returns `true` if this element or any descendant has the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.name == name || self.children.iter().any(|child| child.contains(name))
    }
}

/// Items found between an opening and a closing tag.
#[derive(Debug, Clone)]
enum Content<'src> {
    Element(Element<'src>),
    Skip,
    End,
}

/// Which documents [`parse_document`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentMode {
    /// The source must be an SVG document.
    Markup,
    /// The source may also be a script embedding an SVG document.
    Embedded,
}

fn cut_error(diagnostic: MarkupDiagnostic) -> ErrMode<ContextError<MarkupDiagnostic>> {
    let mut e = ContextError::new();
    e.push(diagnostic);
    ErrMode::Cut(e)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.')
}

/// Parse an element or attribute name, returning it with its span.
fn name<'src>(input: &mut Input<'src>) -> PResult<(&'src str, Span)> {
    let start = input.current_token_start();
    let name = take_while(1.., is_name_char).parse_next(input)?;
    Ok((name, Span::new(start..input.current_token_start())))
}

/// Parse a section delimited by `open` and `close`, committing once `open`
/// has matched.
fn delimited_section<'src>(
    input: &mut Input<'src>,
    open: &'static str,
    close: &'static str,
    what: &'static str,
) -> PResult<()> {
    let start = input.current_token_start();
    open.void().parse_next(input)?;

    cut_err(terminated(take_until(0.., close), close))
        .void()
        .context(
            MarkupDiagnostic::new(ErrorCode::E001, format!("unterminated {what}"), start)
                .with_help("the section is never closed before the end of the input"),
        )
        .parse_next(input)
}

fn comment<'src>(input: &mut Input<'src>) -> PResult<()> {
    delimited_section(input, "<!--", "-->", "comment")
}

fn cdata<'src>(input: &mut Input<'src>) -> PResult<()> {
    delimited_section(input, "<![CDATA[", "]]>", "CDATA section")
}

fn processing_instruction<'src>(input: &mut Input<'src>) -> PResult<()> {
    delimited_section(input, "<?", "?>", "processing instruction")
}

/// Parse a doctype declaration, including an optional internal subset.
///
/// `>` only closes the declaration outside quoted literals and outside the
/// `[ ... ]` subset, where entity declarations carry their own `>`.
fn doctype<'src>(input: &mut Input<'src>) -> PResult<()> {
    let start = input.current_token_start();
    "<!DOCTYPE".void().parse_next(input)?;

    cut_err((doctype_text, opt(internal_subset), multispace0, '>'))
        .void()
        .context(
            MarkupDiagnostic::new(ErrorCode::E001, "unterminated doctype declaration", start)
                .with_help("the section is never closed before the end of the input"),
        )
        .parse_next(input)
}

fn doctype_text<'src>(input: &mut Input<'src>) -> PResult<()> {
    repeat(
        0..,
        alt((declaration_literal, take_till(1.., ['"', '\'', '[', '>']).void())),
    )
    .parse_next(input)
}

fn internal_subset<'src>(input: &mut Input<'src>) -> PResult<()> {
    ('[', subset_text, ']').void().parse_next(input)
}

fn subset_text<'src>(input: &mut Input<'src>) -> PResult<()> {
    repeat(
        0..,
        alt((declaration_literal, take_till(1.., ['"', '\'', ']']).void())),
    )
    .parse_next(input)
}

/// Parse a quoted literal of a declaration.
fn declaration_literal<'src>(input: &mut Input<'src>) -> PResult<()> {
    alt((
        ('"', take_till(0.., '"'), '"').void(),
        ('\'', take_till(0.., '\''), '\'').void(),
    ))
    .parse_next(input)
}

/// Parse whitespace, comments and declarations allowed around the root.
fn misc<'src>(input: &mut Input<'src>) -> PResult<()> {
    alt((multispace1.void(), comment, processing_instruction, doctype)).parse_next(input)
}

fn misc0<'src>(input: &mut Input<'src>) -> PResult<()> {
    repeat(0.., misc).parse_next(input)
}

/// Parse a quoted attribute value, returning the text between the quotes.
fn attribute_value<'src>(input: &mut Input<'src>) -> PResult<&'src str> {
    let start = input.current_token_start();
    let quote = one_of(['"', '\'']).parse_next(input)?;

    cut_err(terminated(take_till(0.., quote), quote))
        .context(
            MarkupDiagnostic::new(ErrorCode::E003, "unterminated attribute value", start)
                .with_help("close the value with a matching quote"),
        )
        .parse_next(input)
}

/// Parse `name="value"`.
fn attribute<'src>(input: &mut Input<'src>) -> PResult<Attribute<'src>> {
    let start = input.current_token_start();
    let (name, _) = name.parse_next(input)?;

    cut_err((multispace0, '=', multispace0))
        .void()
        .context(
            MarkupDiagnostic::new(
                ErrorCode::E002,
                format!("expected `=` after attribute `{name}`"),
                start,
            )
            .with_help("attributes are written as name=\"value\""),
        )
        .parse_next(input)?;

    let value = cut_err(attribute_value)
        .context(
            MarkupDiagnostic::new(
                ErrorCode::E002,
                format!("expected a quoted value for attribute `{name}`"),
                start,
            )
            .with_help("attributes are written as name=\"value\""),
        )
        .parse_next(input)?;

    Ok(Attribute {
        name,
        value,
        span: Span::new(start..input.current_token_start()),
    })
}

/// Parse one element with all of its descendants.
fn element<'src>(input: &mut Input<'src>) -> PResult<Element<'src>> {
    let start = input.current_token_start();
    '<'.parse_next(input)?;

    let (element_name, name_span) = cut_err(name)
        .context(
            MarkupDiagnostic::new(ErrorCode::E002, "expected an element name after `<`", start)
                .with_help("use `&lt;` for a literal `<` in character data"),
        )
        .parse_next(input)?;

    let attributes: Vec<Attribute<'src>> =
        repeat(0.., preceded(multispace1, attribute)).parse_next(input)?;

    let self_closing = preceded(multispace0, alt(("/>".value(true), '>'.value(false))))
        .parse_next(input)
        .map_err(|_: ErrMode<ContextError<MarkupDiagnostic>>| {
            cut_error(
                MarkupDiagnostic::new(
                    ErrorCode::E002,
                    format!("malformed tag `<{element_name}>`"),
                    start,
                )
                .with_help("expected an attribute, `>` or `/>`"),
            )
        })?;

    let children = if self_closing {
        Vec::new()
    } else {
        let children = content(input, element_name, name_span)?;
        closing_tag(input, element_name, name_span)?;
        children
    };

    Ok(Element {
        name: element_name,
        name_span,
        span: Span::new(start..input.current_token_start()),
        attributes,
        children,
    })
}

/// Parse everything between an opening tag and its closing tag.
fn content<'src>(
    input: &mut Input<'src>,
    open_name: &'src str,
    open_span: Span,
) -> PResult<Vec<Element<'src>>> {
    let mut children = Vec::new();

    loop {
        if input.eof_offset() == 0 {
            let mut diagnostic = MarkupDiagnostic::new(
                ErrorCode::E005,
                format!("unclosed element `<{open_name}>`"),
                open_span.start(),
            )
            .with_help("add the missing closing tag");
            diagnostic.end = Some(open_span.end());
            return Err(cut_error(diagnostic));
        }

        let item = alt((
            peek("</").value(Content::End),
            comment.value(Content::Skip),
            cdata.value(Content::Skip),
            processing_instruction.value(Content::Skip),
            element.map(Content::Element),
            take_while(1.., |c: char| c != '<').value(Content::Skip),
        ))
        .parse_next(input)?;

        match item {
            Content::Element(child) => children.push(child),
            Content::Skip => {}
            Content::End => return Ok(children),
        }
    }
}

/// Parse `</name>` and check it closes the innermost open element.
fn closing_tag<'src>(input: &mut Input<'src>, open_name: &str, open_span: Span) -> PResult<()> {
    let start = input.current_token_start();
    "</".void().parse_next(input)?;

    let (close_name, close_span) = cut_err(name)
        .context(MarkupDiagnostic::new(
            ErrorCode::E002,
            "expected an element name after `</`",
            start,
        ))
        .parse_next(input)?;

    if close_name != open_name {
        let mut diagnostic = MarkupDiagnostic::new(
            ErrorCode::E004,
            format!("mismatched closing tag `</{close_name}>`"),
            close_span.start(),
        )
        .with_help("close elements in the order they were opened");
        diagnostic.end = Some(close_span.end());
        diagnostic.opened = Some(open_span);
        return Err(cut_error(diagnostic));
    }

    cut_err((multispace0, '>'))
        .void()
        .context(MarkupDiagnostic::new(
            ErrorCode::E002,
            format!("expected `>` to end closing tag `</{close_name}`"),
            start,
        ))
        .parse_next(input)
}

/// Skip the script preamble up to the embedded `<svg` document.
fn script_preamble<'src>(input: &mut Input<'src>) -> PResult<()> {
    let start = input.current_token_start();
    take_until(0.., "<svg")
        .void()
        .parse_next(input)
        .map_err(|_: ErrMode<ContextError<MarkupDiagnostic>>| {
            let mut diagnostic = MarkupDiagnostic::new(
                ErrorCode::E100,
                "no `<svg>` document found in symbol script",
                start,
            )
            .with_help("the script must embed the sprite as a string starting with `<svg`");
            diagnostic.end = Some(start);
            cut_error(diagnostic)
        })
}

fn document<'src>(input: &mut Input<'src>, mode: DocumentMode) -> PResult<Element<'src>> {
    opt('\u{feff}').void().parse_next(input)?;
    misc0.parse_next(input)?;

    let is_markup = opt(peek('<')).parse_next(input)?.is_some();
    if !is_markup && mode == DocumentMode::Embedded {
        script_preamble.parse_next(input)?;
        return element.parse_next(input);
    }

    let root = element.parse_next(input)?;
    misc0.parse_next(input)?;

    if input.eof_offset() != 0 {
        return Err(cut_error(
            MarkupDiagnostic::new(
                ErrorCode::E101,
                "unexpected content after the root element",
                input.current_token_start(),
            )
            .with_help("a document has exactly one root element"),
        ));
    }

    Ok(root)
}

/// Convert a winnow error into a diagnostic.
fn convert_error(
    error: ErrMode<ContextError<MarkupDiagnostic>>,
    position: usize,
    source_len: usize,
) -> Diagnostic {
    let context = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().next().cloned(),
        ErrMode::Incomplete(_) => None,
    };

    let Some(context) = context else {
        let start = position.min(source_len);
        let span = Span::new(start..(start + 1).min(source_len));
        return Diagnostic::error("malformed markup")
            .with_code(ErrorCode::E002)
            .with_label(span, "unexpected input");
    };

    let end = context.end.unwrap_or(position).min(source_len);
    let span = Span::new(context.start.min(source_len)..end);

    let mut diagnostic = Diagnostic::error(context.message)
        .with_code(context.code)
        .with_label(span, context.code.description());
    if let Some(opened) = context.opened {
        diagnostic = diagnostic.with_secondary_label(opened, "element opened here");
    }
    if let Some(help) = context.help {
        diagnostic = diagnostic.with_help(help);
    }
    diagnostic
}

/// Parse a document into its root element.
///
/// # Errors
///
/// Returns a [`Diagnostic`] pointing at the first markup error.
pub(crate) fn parse_document(source: &str, mode: DocumentMode) -> Result<Element<'_>, Diagnostic> {
    let mut input = LocatingSlice::new(source);

    document(&mut input, mode)
        .map_err(|err| convert_error(err, input.current_token_start(), source.len()))
}
