use minijinja::context;

use crate::app::services::template_engine::{TemplateEngine, mapping_value};
use crate::domain::template_names::fragment_template;
use crate::domain::yaml::dump_fragment;
use crate::domain::{AppError, BlockKind, BlockSpec, ResolvedArgs};

/// Render the blocks of a custom job and concatenate them in order.
///
/// A fragment renders like a job template: `job` is bound to the block's own
/// mapping, with `block` as an alias, next to `args`. Raw blocks are dumped
/// to YAML and rendered as a template, so inline steps can still reference
/// parameters.
pub fn compose_steps(
    blocks: &[BlockSpec],
    args: &ResolvedArgs,
    engine: &TemplateEngine,
) -> Result<String, AppError> {
    let mut rendered = String::new();
    for block in blocks {
        rendered.push_str(&compose_block(block, args, engine)?);
    }
    Ok(rendered)
}

fn compose_block(
    block: &BlockSpec,
    args: &ResolvedArgs,
    engine: &TemplateEngine,
) -> Result<String, AppError> {
    let fields = mapping_value(&block.fields);
    let ctx = context! {
        job => fields.clone(),
        block => fields,
        args => engine.args_value(args),
    };

    match &block.kind {
        BlockKind::Template { name } => engine.render(&fragment_template(name), ctx),
        BlockKind::Raw { steps } => {
            let source = format!("{}\n", dump_fragment(steps)?.trim_end_matches('\n'));
            engine.render_inline("raw block", &source, ctx)
        }
    }
}
