use galaxy_configurator::{filters, to_engine_value, ContextBuilder};
use handlebars::Handlebars;

const TEMPLATE: &str = "\
# galaxy.yml (generated)
galaxy:
{{to_nice_yaml galaxy 2}}

uwsgi:
{{to_nice_yaml galaxy_uwsgi 2}}
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Filter set the engine must load, declared once at setup
    println!("required extensions: {:?}", filters::extensions());

    let context = ContextBuilder::from_process_env()
        .with_seed_file("context.yml", false)
        .build()?;

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    filters::register_filters(&mut handlebars);

    let rendered = handlebars.render_template(TEMPLATE, &to_engine_value(&context)?)?;
    println!("{}", rendered);

    Ok(())
}
