// SPDX-License-Identifier: PMPL-1.0-or-later
//! Reference hero content.
//!
//! The copy and assets the Rodax Refacciones hero section is built from,
//! exported as data, plus a renderer that lays it out the way the page
//! component does. The rendered page passes every check with the default
//! configuration and is the baseline for the scenario tests.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub trusted_brands: Vec<Brand>,
    pub key_features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Brand {
    fn new(name: &str, logo: &str) -> Self {
        Self {
            name: name.to_string(),
            logo: logo.to_string(),
        }
    }
}

impl Feature {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Refacciones de Calidad para Camiones Pesados".to_string(),
            subtitle: "Entrega inmediata en Saltillo • Servicio personalizado • Marcas de confianza"
                .to_string(),
            cta_text: "Ver Catálogo de Productos".to_string(),
            cta_link: "/catalog".to_string(),
            trusted_brands: vec![
                Brand::new("Fleetguard", "/brands/fleetguard.png"),
                Brand::new("Donaldson", "/brands/donaldson.png"),
                Brand::new("Philips", "/brands/philips.png"),
                Brand::new("AMTRK", "/brands/amtrk.png"),
            ],
            key_features: vec![
                Feature::new(
                    "🚚",
                    "Entrega Inmediata",
                    "En Saltillo mismo día, envío gratis a domicilio",
                ),
                Feature::new(
                    "🔧",
                    "Servicio Personalizado",
                    "Asesoría experta para cada tipo de vehículo",
                ),
                Feature::new(
                    "⭐",
                    "Calidad Garantizada",
                    "Solo marcas reconocidas mundialmente",
                ),
            ],
        }
    }
}

/// Embedded page template, rendered with Tera's HTML autoescaping
pub const HERO_HTML: &str = include_str!("../templates/hero.html");

const HERO_TEMPLATE: &str = "hero.html";

impl HeroContent {
    /// Render a complete page with `brand` as the `h1` text.
    ///
    /// Features go in a `grid` container, one `div` each; brands go in a
    /// `flex` row of `figure`s so they never count as feature items.
    pub fn render_page(&self, brand: &str) -> Result<String> {
        let mut tera = Tera::default();
        tera.add_raw_template(HERO_TEMPLATE, HERO_HTML)?;

        let mut context = Context::new();
        context.insert("brand", brand);
        context.insert("content", self);

        Ok(tera.render(HERO_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;
    use crate::snapshot::PageSnapshot;

    #[test]
    fn test_default_content() {
        let content = HeroContent::default();
        assert_eq!(content.key_features.len(), 3);
        assert_eq!(content.trusted_brands.len(), 4);
        assert_eq!(content.cta_link, "/catalog");
    }

    #[test]
    fn test_rendered_text_round_trips_through_parser() {
        let content = HeroContent {
            title: "Frenos & <Clutch>".to_string(),
            ..HeroContent::default()
        };
        let html = content.render_page("RODAX").unwrap();
        assert!(html.contains("Frenos &amp; &lt;Clutch&gt;"));

        let page = PageSnapshot::parse(&html);
        assert_eq!(page.text_of(&Query::message_heading()), "Frenos & <Clutch>");
        assert_eq!(page.text_of(&Query::brand_heading()), "RODAX");
    }

    #[test]
    fn test_brands_are_not_feature_items() {
        let page = PageSnapshot::parse(&HeroContent::default().render_page("RODAX").unwrap());
        let grid_like = page.all(&Query::class_marker("grid"));
        assert_eq!(grid_like.len(), 1);
    }

    #[test]
    fn test_quoted_brand_stays_inside_attribute() {
        let html = HeroContent::default().render_page("\"RODAX\"").unwrap();
        let page = PageSnapshot::parse(&html);
        let section = page.first(&Query::banner()).unwrap();
        let label = crate::snapshot::attr(section, "aria-label").unwrap();
        assert!(label.starts_with("\"RODAX\" - "));
    }

    #[test]
    fn test_serializes_as_data() {
        let json = serde_json::to_value(HeroContent::default()).unwrap();
        assert_eq!(json["key_features"][0]["title"], "Entrega Inmediata");
        assert_eq!(json["trusted_brands"][3]["name"], "AMTRK");
    }
}
