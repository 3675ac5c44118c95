use minijinja::{Environment, context};

/// Wrap a rendered menu fragment in a minimal standalone page.
pub fn emit_page(menu: &str, title: &str) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("page.html", include_str!("../../templates/page.html.j2"))?;
    let tmpl = env.get_template("page.html")?;
    tmpl.render(context! { title => title, menu => menu })
}
