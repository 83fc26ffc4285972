//! Template filters the rendering engine must load.
//!
//! The configuration templates lean on YAML emission (`to_nice_yaml`) to
//! splice whole namespace tables into the rendered file.

use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};

/// Identifier of the filter set this crate requires; passed to the
/// template engine at setup so the helpers below are available inside
/// templates.
pub const YAML_FILTERS: &str = "yaml_filters";

/// Returns the filter-set identifiers the rendering engine must load.
pub fn extensions() -> &'static [&'static str] {
    &[YAML_FILTERS]
}

/// `to_yaml` - renders a value as its plain YAML representation.
pub fn to_yaml_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h
        .param(0)
        .map(|v| v.value())
        .ok_or_else(|| RenderError::new("to_yaml requires a value parameter"))?;

    let yaml = serde_yaml::to_string(value)
        .map_err(|e| RenderError::new(format!("YAML serialization error: {}", e)))?;

    out.write(yaml.trim_end())?;
    Ok(())
}

/// `to_nice_yaml` - renders a value as indented YAML, with an optional
/// indent width (spaces prepended to every line) as the second parameter.
pub fn to_nice_yaml_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h
        .param(0)
        .map(|v| v.value())
        .ok_or_else(|| RenderError::new("to_nice_yaml requires a value parameter"))?;

    let indent = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(0) as usize;

    let yaml = serde_yaml::to_string(value)
        .map_err(|e| RenderError::new(format!("YAML serialization error: {}", e)))?;

    let pad = " ".repeat(indent);
    let mut first = true;
    for line in yaml.trim_end().lines() {
        if !first {
            out.write("\n")?;
        }
        first = false;
        if line.is_empty() {
            continue;
        }
        out.write(&pad)?;
        out.write(line)?;
    }
    Ok(())
}

/// Registers the filter set with a Handlebars instance.
pub fn register_filters(handlebars: &mut Handlebars) {
    handlebars.register_helper("to_yaml", Box::new(to_yaml_helper));
    handlebars.register_helper("to_nice_yaml", Box::new(to_nice_yaml_helper));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_handlebars() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        register_filters(&mut handlebars);
        handlebars
    }

    #[test]
    fn test_extensions_is_stable_single_element() {
        assert_eq!(extensions(), &[YAML_FILTERS]);
        assert_eq!(extensions(), extensions());
    }

    #[test]
    fn test_to_yaml_scalar() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{to_yaml name}}", &json!({"name": "galaxy"}))
            .unwrap();
        assert_eq!(result, "galaxy");
    }

    #[test]
    fn test_to_nice_yaml_mapping() {
        let handlebars = create_test_handlebars();
        let context = json!({
            "galaxy": {
                "admin_users": "admin@example.org",
                "allow_user_creation": false
            }
        });

        let result = handlebars
            .render_template("{{to_nice_yaml galaxy}}", &context)
            .unwrap();
        assert!(result.contains("admin_users: admin@example.org"));
        assert!(result.contains("allow_user_creation: false"));
    }

    #[test]
    fn test_to_nice_yaml_indent() {
        let handlebars = create_test_handlebars();
        let context = json!({"galaxy": {"brand": "Dev"}});

        let result = handlebars
            .render_template("{{to_nice_yaml galaxy 4}}", &context)
            .unwrap();
        assert_eq!(result, "    brand: Dev");
    }

    #[test]
    fn test_render_built_context() {
        use crate::context::{to_engine_value, ContextBuilder, EnvSnapshot};

        let env: EnvSnapshot = [("GALAXY_CONFIG_BRAND", "Dev")].into_iter().collect();
        let context = ContextBuilder::new(env).build().unwrap();
        let engine_value = to_engine_value(&context).unwrap();

        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("brand: {{galaxy.brand}}", &engine_value)
            .unwrap();
        assert_eq!(result, "brand: Dev");
    }
}
