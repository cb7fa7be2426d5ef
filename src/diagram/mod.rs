pub mod lexer;
pub mod placeholder;
pub mod spacing;
pub mod template;

pub use self::placeholder::{Field, Placeholder, PlaceholderKey};
pub use self::spacing::SpacingPolicy;
pub use self::template::WEIGHT_DIAGRAM;

use self::lexer::Token;
use self::spacing::Mark;
use crate::config::RenderSettings;
use crate::error::{DcResult, DistCalcError};
use crate::model::{WeightDistribution, WeightFigure};
use std::collections::BTreeMap;

/// Supplies the (weight, percentage) pair behind a placeholder key.
pub trait FigureSource {
    fn lookup(&self, key: PlaceholderKey) -> Option<WeightFigure>;
}

impl FigureSource for WeightDistribution {
    fn lookup(&self, key: PlaceholderKey) -> Option<WeightFigure> {
        Some(*self.get(key.figure()))
    }
}

impl FigureSource for BTreeMap<PlaceholderKey, WeightFigure> {
    fn lookup(&self, key: PlaceholderKey) -> Option<WeightFigure> {
        self.get(&key).copied()
    }
}

enum Piece<'t> {
    Literal(&'t str),
    Text(String),
    Space { padding: usize },
}

/// Fills a placeholder template. Holds no per-render state, so one renderer
/// can serve any number of renders.
#[derive(Debug, Clone)]
pub struct Renderer<'t> {
    template: &'t str,
    settings: RenderSettings,
}

impl<'t> Renderer<'t> {
    pub fn new(template: &'t str, settings: RenderSettings) -> Self {
        Self { template, settings }
    }

    pub fn render(&self, source: &impl FigureSource) -> DcResult<String> {
        self.settings.validate()?;
        let tokens = lexer::tokenize(self.template)?;

        let mut pieces = Vec::with_capacity(tokens.len());
        let mut marks = Vec::with_capacity(tokens.len());
        for token in tokens {
            let (piece, mark) = self.resolve(token, source)?;
            pieces.push(piece);
            marks.push(mark);
        }

        let allocations = spacing::plan(
            self.settings.spacing,
            &marks,
            self.settings.max_digit_length,
        );

        let mut out = String::with_capacity(self.template.len());
        for (piece, alloc) in pieces.iter().zip(allocations) {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Text(s) => out.push_str(s),
                Piece::Space { padding } => {
                    let padding = isize::try_from(*padding).unwrap_or(isize::MAX);
                    let count = usize::try_from(alloc.saturating_add(padding)).unwrap_or(0);
                    out.extend(std::iter::repeat(' ').take(count));
                }
            }
        }
        Ok(out)
    }

    fn resolve(
        &self,
        token: Token<'t>,
        source: &impl FigureSource,
    ) -> DcResult<(Piece<'t>, Mark)> {
        let body = match token {
            Token::Literal(s) => {
                let newlines = s.matches('\n').count();
                return Ok((Piece::Literal(s), Mark::Text { newlines }));
            }
            Token::Placeholder { body, .. } => body,
        };

        let placeholder = Placeholder::parse(body)?;
        Ok(match placeholder {
            Placeholder::DynamicSpace => (
                Piece::Space {
                    padding: self.settings.dynamic_space_padding,
                },
                Mark::Space,
            ),
            Placeholder::StaticSpace => (Piece::Space { padding: 0 }, Mark::Space),
            Placeholder::Value { key, field } => {
                let figure = source
                    .lookup(key)
                    .ok_or_else(|| DistCalcError::UnknownPlaceholder {
                        token: body.to_string(),
                    })?;
                let text = match field {
                    Field::Weight => figure.weight.to_string(),
                    Field::Percentage => figure.percentage.to_string(),
                };
                let mark = if placeholder.sets_allocation() {
                    Mark::Weight { width: text.len() }
                } else {
                    Mark::Text { newlines: 0 }
                };
                (Piece::Text(text), mark)
            }
        })
    }
}

/// Renders the built-in car diagram.
pub fn render_diagram(
    distribution: &WeightDistribution,
    settings: &RenderSettings,
) -> DcResult<String> {
    Renderer::new(WEIGHT_DIAGRAM, settings.clone()).render(distribution)
}
