//! Card markup for the portfolio page.
//!
//! Cards carry the `reveal` class and a `--delay` custom property so the
//! page stylesheet can stagger their entrance; preview images are deferred
//! with `data-src` and `loading="lazy"`.

use indoc::indoc;
use minijinja::{Environment, UndefinedBehavior, context};

use super::CardGrid;
use crate::commands::theme::catalog::Theme;

const TEMPLATE_NAME: &str = "projects.html";

const TEMPLATE: &str = indoc! {r#"
    <section class="projects-grid {{ theme.body_class }}" id="projectsGrid" data-theme="{{ theme.key }}">
    {%- for skeleton in range(skeletons) %}
      <div class="project-card skeleton" aria-hidden="true"></div>
    {%- endfor %}
    {%- for card in cards %}
      <article class="project-card reveal{% if card.placeholder %} placeholder{% endif %}" data-language="{{ card.filter_tag }}" style="--delay: {{ card.reveal_delay_ms }}ms">
        {%- if card.preview_image %}
        <img class="project-preview" data-src="{{ card.preview_image }}" alt="{{ card.title }} preview" loading="lazy">
        {%- endif %}
        <div class="project-header">
          <h3>{{ card.title }}</h3>
          <span class="project-badge">{{ card.badge }}</span>
        </div>
        <p class="project-meta">{{ card.meta }}</p>
        <p class="project-description">{{ card.description }}</p>
        <a class="project-link" href="{{ card.link }}" target="_blank" rel="noopener">{{ card.link_label }}</a>
      </article>
    {%- endfor %}
    </section>
    {%- if status %}
    <p class="projects-status" role="status" aria-live="polite">{{ status }}</p>
    {%- endif %}
"#};

/// Render the grid as an HTML fragment styled for `theme`. Text is
/// HTML-escaped.
pub fn render(grid: &CardGrid, theme: &Theme) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let cards: Vec<_> = grid.cards().collect();
    env.get_template(TEMPLATE_NAME)?.render(context! {
        theme => theme,
        skeletons => grid.skeletons(),
        cards => cards,
        status => grid.status(),
    })
}
