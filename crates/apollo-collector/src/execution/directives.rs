use crate::ast::DirectiveList;
use crate::ast::Value;
use crate::execution::JsonMap;

/// Returns whether a selection with these directives takes part in execution,
/// according to the built-in `@skip` and `@include` directives.
///
/// * `@skip(if: true)` excludes the selection
/// * `@include(if: false)` excludes the selection
///
/// When both are present, both must allow the selection.
/// An `if` argument given as a variable is looked up in `variable_values`.
/// A directive whose condition cannot be evaluated (an absent argument,
/// a variable missing from `variable_values`, or a non-boolean value)
/// is ignored, as if it were not there.
///
/// <https://spec.graphql.org/October2021/#sec--skip>
/// <https://spec.graphql.org/October2021/#sec--include>
pub fn should_include(directives: &DirectiveList, variable_values: &JsonMap) -> bool {
    !eval_if_arg(directives, "skip", variable_values).unwrap_or(false)
        && eval_if_arg(directives, "include", variable_values).unwrap_or(true)
}

fn eval_if_arg(
    directives: &DirectiveList,
    directive_name: &str,
    variable_values: &JsonMap,
) -> Option<bool> {
    match &**directives
        .get(directive_name)?
        .specified_argument_by_name("if")?
    {
        Value::Boolean(value) => Some(*value),
        Value::Variable(var) => variable_values.get(var.as_str())?.as_bool(),
        _ => None,
    }
}
