//! Assembles the final SVG document from the computed layout.

use crate::animation::{
    self, BARCODE_REVEAL, BORDER_TRACE, CORNER_BLINK, FADE_IN, FillAnimation, IMAGE_BLINK,
    TITLE_RULE,
};
use crate::assets::EmbeddedAssets;
use crate::color::darken;
use crate::config::RenderConfig;
use crate::error::{CardError, Result};
use crate::geometry::{CardGeometry, RankProgress, fmt_fixed, fmt_num};
use crate::icons::IconSet;
use crate::segments::{LanguageRing, build_language_ring};
use crate::stats::StatsSnapshot;
use crate::xml::{escape_attr, escape_text};

/// Font identifier in [`EmbeddedAssets::fonts`] and the CSS family it backs.
pub const FONT_FACES: &[(&str, &str)] = &[
    ("Rajdhani-Regular", "Rajdhani"),
    ("ChakraPetch-Regular", "ChakraPetch"),
    ("LibreBarcode128-Regular", "LibreBarcode128"),
];

const LABEL_X: f64 = 40.0;
const VALUE_X: f64 = 300.0;
const ICON_OFFSET: (f64, f64) = (5.0, -18.0);
const LEGEND_SWATCH: f64 = 14.0;
const LEGEND_BASELINE_NUDGE: f64 = 5.0;

/// Notched frame around the language ring, laid out for a 1100x600 card.
const BORDER_MAIN: &str = "M 430,340 L 650,340 L 660,350 L 1080,350 L 1080,540 L 1040,580 L 430,580 Z";
const BORDER_CORNER: &str = "M 1080,555 L 1080,580 L 1055,580 Z";
const BORDER_LEFT: &str =
    "M 420,340 L 430,340 L 430,580 L 420,580 L 420,540 L 425,535 L 425,480 L 420,475 Z";
const BORDER_TRACE_LENGTH: u32 = 3500;

/// Renders cards for one layout. Configuration is validated once; each
/// [`CardRenderer::render`] call is independent.
#[derive(Debug, Clone)]
pub struct CardRenderer<'a> {
    config: &'a RenderConfig,
    assets: &'a EmbeddedAssets,
    icons: &'a IconSet,
    geometry: CardGeometry,
    rank_track_color: String,
}

impl<'a> CardRenderer<'a> {
    pub fn new(
        config: &'a RenderConfig,
        assets: &'a EmbeddedAssets,
        icons: &'a IconSet,
    ) -> Result<Self> {
        config.validate()?;

        let rank_track_color = darken(&config.rank.ring_bg_base, config.rank.ring_bg_dark_level)
            .ok_or_else(|| CardError::InvalidColor {
                field: "rank.ring_bg_base".to_string(),
                value: config.rank.ring_bg_base.clone(),
            })?;

        let geometry = CardGeometry::new(config);
        tracing::debug!(
            rank_cx = geometry.rank_ring.center.x,
            rank_cy = geometry.rank_ring.center.y,
            language_cx = geometry.language_ring.center.x,
            language_cy = geometry.language_ring.center.y,
            "card geometry"
        );

        for (id, _) in FONT_FACES {
            if assets.font(id).is_none() {
                tracing::warn!(font = id, "font not embedded, falling back to Helvetica");
            }
        }

        Ok(Self {
            config,
            assets,
            icons,
            geometry,
            rank_track_color,
        })
    }

    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    pub fn render(&self, stats: &StatsSnapshot) -> Result<String> {
        stats.validate()?;

        let progress = self.geometry.rank_progress(stats.rank.percentile);
        let ring = build_language_ring(
            stats,
            &self.geometry.language_ring,
            &self.geometry.legend,
        );
        tracing::debug!(
            name = %stats.name,
            segments = ring.segments.len(),
            target_offset = progress.target_offset,
            "rendering card"
        );

        let mut svg = String::with_capacity(self.estimated_len());
        svg.push_str(&format!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            w = fmt_num(self.config.width),
            h = fmt_num(self.config.height),
        ));
        self.push_style(&mut svg, &progress);
        self.push_header(&mut svg, stats);
        self.push_stat_rows(&mut svg, stats);
        self.push_rank_ring(&mut svg, stats, &progress);
        self.push_image(&mut svg);
        self.push_language_ring(&mut svg, &ring);
        self.push_border(&mut svg);
        svg.push_str("</svg>");

        Ok(svg)
    }

    fn estimated_len(&self) -> usize {
        let fonts: usize = self.assets.fonts.values().map(String::len).sum();
        let image = self.assets.image.as_ref().map_or(0, |i| i.base64.len());
        fonts + image + 16 * 1024
    }

    fn push_style(&self, svg: &mut String, progress: &RankProgress) {
        let colors = &self.config.colors;
        svg.push_str("<style>");

        for (id, family) in FONT_FACES {
            if let Some(data) = self.assets.font(id) {
                svg.push_str(&format!(
                    "@font-face {{ font-family: '{}'; src: url('data:font/truetype;charset=utf-8;base64,{}') format('truetype'); }}",
                    family, data
                ));
            }
        }

        svg.push_str(&format!(
            "@keyframes change-opacity {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}\
             .animate {{ opacity: 0; animation: change-opacity {}s ease-out forwards; }}",
            fmt_num(FADE_IN)
        ));

        for (row, delay) in animation::row_delays().enumerate() {
            svg.push_str(&format!(
                ".animate-delay-{} {{ animation-delay: {}s, {}s; }}",
                row + 1,
                fmt_num(delay.primary),
                fmt_num(delay.secondary)
            ));
        }

        let fill = FillAnimation::new(progress.circumference, progress.target_offset);
        svg.push_str(&format!(
            "@keyframes fillProgress {{ from {{ stroke-dashoffset: {}; }} to {{ stroke-dashoffset: {}; }} }}",
            fmt_num(fill.from),
            fmt_num(fill.to)
        ));

        svg.push_str(&format!(
            "@keyframes blink-twice {{ 0%, 100% {{ opacity: 1; }} 25%, 75% {{ opacity: 0; }} 50% {{ opacity: 1; }} }}\
             .blink {{ animation: blink-twice {}s ease-out; }}\
             .rank-progress {{ animation: fillProgress {}s ease-out forwards; stroke-linecap: round; }}",
            fmt_num(IMAGE_BLINK),
            fmt_num(fill.duration)
        ));

        svg.push_str(&format!(
            ".background {{ fill: none; }}\
             .title {{ font-family: 'ChakraPetch', Helvetica; fill: {title}; font-size: 30px; font-weight: bold; }}\
             .label {{ font-family: 'Rajdhani', Helvetica; fill: {label}; font-size: 22px; }}\
             .value {{ font-family: 'Rajdhani', Helvetica; fill: {value}; font-size: 24px; font-weight: bold; }}\
             .barcode {{ font-family: 'LibreBarcode128', Helvetica; fill: {title}; }}\
             .rank-letter {{ font-family: 'ChakraPetch', Helvetica; fill: {letter}; font-size: 68px; font-weight: bold; }}\
             .rank-percentage {{ font-family: 'Rajdhani', Helvetica; fill: {percentage}; font-size: 26px; font-weight: bold; }}\
             .language-legend {{ font-family: 'Rajdhani', Helvetica; font-size: 16px; }}\
             .icon {{ fill: {icon}; }}",
            title = colors.title,
            label = colors.label,
            value = colors.value,
            letter = colors.rank_letter,
            percentage = colors.rank_percentage,
            icon = colors.icon,
        ));

        svg.push_str("</style>");
    }

    fn push_header(&self, svg: &mut String, stats: &StatsSnapshot) {
        let width = self.config.width;
        let icon_color = &self.config.colors.icon;

        svg.push_str(r#"<rect class="background" width="100%" height="100%" />"#);
        svg.push_str(&format!(
            r#"<text x="50" y="40" class="title animate" font-size="36">{}'s GitHub Stats</text>"#,
            escape_text(&stats.name)
        ));

        svg.push_str(&format!(
            r#"<clipPath id="clipPathReveal"><rect x="0" y="0" height="100" width="0"><animate attributeName="width" begin="0s" dur="{}s" from="0" to="{}" fill="freeze" /></rect></clipPath>"#,
            fmt_num(BARCODE_REVEAL),
            fmt_num(width)
        ));

        let profile_url = self
            .config
            .profile_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}", stats.name));
        svg.push_str(&format!(
            r#"<text x="{}" y="85" class="barcode" text-anchor="end" font-size="30" clip-path="url(#clipPathReveal)">{}</text>"#,
            fmt_num(width - 20.0),
            escape_text(&profile_url)
        ));

        svg.push_str(&format!(
            r#"<line x1="10" y1="60" x2="10" y2="60" stroke="{}" stroke-width="4"><animate attributeName="x2" from="10" to="{}" dur="{}s" fill="freeze" /></line>"#,
            icon_color,
            fmt_num(width - 10.0),
            fmt_num(TITLE_RULE)
        ));
    }

    fn push_stat_rows(&self, svg: &mut String, stats: &StatsSnapshot) {
        for (row, stat) in stats.rows().iter().enumerate() {
            let origin = self.geometry.stat_row_origin(row);
            svg.push_str(&format!(
                r#"<g transform="translate({}, {})" class="stat-row animate animate-delay-{}">"#,
                fmt_num(origin.x),
                fmt_num(origin.y),
                row + 1
            ));

            if let Some(icon) = self.icons.get(stat.icon) {
                svg.push_str(&format!(
                    r#"<path class="icon" d="{}" transform="translate({}, {}) scale({})"/>"#,
                    escape_attr(&icon.path),
                    fmt_num(ICON_OFFSET.0),
                    fmt_num(ICON_OFFSET.1),
                    icon.scale()
                ));
            }

            svg.push_str(&format!(
                r#"<text x="{}" y="0" class="label">{}</text><text x="{}" y="0" class="value">{}</text></g>"#,
                fmt_num(LABEL_X),
                stat.label,
                fmt_num(VALUE_X),
                escape_text(&stat.value)
            ));
        }
    }

    fn push_rank_ring(&self, svg: &mut String, stats: &StatsSnapshot, progress: &RankProgress) {
        let ring = &self.geometry.rank_ring;
        let cx = fmt_num(ring.center.x);
        let cy = fmt_num(ring.center.y);
        let r = fmt_num(ring.radius);
        let circumference = fmt_num(progress.circumference);

        svg.push_str(&format!(
            r#"<circle class="rank-circle-bg" cx="{cx}" cy="{cy}" r="{r}" stroke="{}" stroke-width="{}" fill="none" />"#,
            self.rank_track_color,
            fmt_num(ring.thickness),
        ));

        svg.push_str(&format!(
            r#"<path class="rank-progress" d="M {cx},{cy} m {},0 a {r},{r} 0 1,0 {},0 a {r},{r} 0 1,0 {},0" transform="rotate(-90 {cx} {cy})" stroke-dasharray="{circumference}" stroke-dashoffset="{circumference}" stroke="{}" stroke-width="{}" fill="none" />"#,
            fmt_num(-ring.radius),
            fmt_num(2.0 * ring.radius),
            fmt_num(-2.0 * ring.radius),
            self.config.colors.rank_progress_bar,
            fmt_num(self.config.rank.progress_bar_thickness),
        ));

        svg.push_str(&format!(
            r#"<text x="{cx}" y="{}" class="rank-letter animate" text-anchor="middle">{}</text>"#,
            fmt_num(ring.center.y + (ring.radius / 6.0).round()),
            escape_text(&stats.rank.level)
        ));
        svg.push_str(&format!(
            r#"<text x="{cx}" y="{}" class="rank-percentage animate" text-anchor="middle" dx="0.1em">{}%</text>"#,
            fmt_num(ring.center.y + (ring.radius * 2.0 / 3.0).round() - 6.0),
            fmt_fixed(stats.rank.percentile, 1)
        ));
    }

    fn push_image(&self, svg: &mut String) {
        let Some(image) = &self.assets.image else {
            return;
        };

        let placement = self.geometry.image_placement(image);
        svg.push_str(&format!(
            r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" class="blink" />"#,
            image.data_uri(),
            fmt_num(placement.x),
            fmt_num(placement.y),
            fmt_num(placement.width),
            fmt_num(placement.height)
        ));
    }

    fn push_language_ring(&self, svg: &mut String, ring: &LanguageRing) {
        let geometry = &self.geometry.language_ring;
        let cx = fmt_num(geometry.center.x);
        let cy = fmt_num(geometry.center.y);
        let colors = &self.config.colors;

        for (segment, entry) in ring.segments.iter().zip(&ring.legend) {
            svg.push_str(&format!(
                r#"<circle class="language-segment" cx="{cx}" cy="{cy}" r="{}" stroke="{}" stroke-width="{}" fill="none" stroke-dasharray="{} {}" stroke-dashoffset="{}" transform="rotate(90 {cx} {cy})" style="opacity: 0; animation: change-opacity {}s ease-out forwards; animation-delay: {}s;" />"#,
                fmt_num(geometry.radius),
                escape_attr(&segment.color),
                fmt_num(geometry.thickness),
                fmt_num(segment.length),
                fmt_num(segment.gap),
                fmt_num(segment.dash_offset),
                fmt_num(FADE_IN),
                fmt_num(segment.delay),
            ));

            svg.push_str(&format!(
                r#"<g transform="translate({}, {})" class="language-entry animate" style="animation-delay: {}s;"><rect width="{}" height="{}" fill="{}" /><text x="20" y="12" class="language-legend"><tspan fill="{}">{}</tspan><tspan fill="{}" dx="5">{}</tspan></text></g>"#,
                fmt_num(entry.slot.x),
                fmt_num(entry.slot.y + LEGEND_BASELINE_NUDGE),
                fmt_num(entry.delay),
                fmt_num(LEGEND_SWATCH),
                fmt_num(LEGEND_SWATCH),
                escape_attr(&entry.color),
                colors.label,
                escape_text(&entry.language),
                colors.value,
                entry.percent_label(),
            ));
        }
    }

    fn push_border(&self, svg: &mut String) {
        let icon_color = &self.config.colors.icon;

        svg.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="2"><animate attributeName="stroke-dasharray" from="0, {len}" to="{len}, 0" dur="{}s" fill="freeze" /></path>"#,
            BORDER_MAIN,
            icon_color,
            fmt_num(BORDER_TRACE),
            len = BORDER_TRACE_LENGTH,
        ));
        svg.push_str(&format!(
            r#"<path d="{}" fill="{c}" stroke="{c}" stroke-width="2"><animate attributeName="opacity" values="1;0;1" dur="{}s" repeatCount="4" /></path>"#,
            BORDER_CORNER,
            fmt_num(CORNER_BLINK),
            c = icon_color,
        ));
        svg.push_str(&format!(
            r#"<path d="{}" fill="{c}" stroke="{c}" stroke-width="2" />"#,
            BORDER_LEFT,
            c = icon_color,
        ));
    }
}

/// Render one card with a throwaway [`CardRenderer`].
pub fn render_card(
    stats: &StatsSnapshot,
    config: &RenderConfig,
    assets: &EmbeddedAssets,
    icons: &IconSet,
) -> Result<String> {
    CardRenderer::new(config, assets, icons)?.render(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::EmbeddedImage;
    use crate::assets::tests::wide_gif;
    use crate::stats::tests::octocat;
    use indexmap::IndexMap;
    use quick_xml::Reader;
    use quick_xml::events::{BytesStart, Event};

    #[derive(Debug, Default)]
    struct Element {
        name: String,
        attrs: Vec<(String, String)>,
        text: String,
    }

    impl Element {
        fn attr(&self, key: &str) -> Option<&str> {
            self.attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }

        fn has_class(&self, class: &str) -> bool {
            self.attr("class")
                .is_some_and(|c| c.split_whitespace().any(|c| c == class))
        }
    }

    fn element(start: &BytesStart) -> Element {
        let attrs = start
            .attributes()
            .map(|a| {
                let a = a.expect("well-formed attribute");
                (
                    String::from_utf8_lossy(a.key.as_ref()).into_owned(),
                    String::from_utf8_lossy(&a.value).into_owned(),
                )
            })
            .collect();
        Element {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attrs,
            text: String::new(),
        }
    }

    /// Parse the whole document, panicking if it is not well-formed XML.
    fn parse(svg: &str) -> Vec<Element> {
        let mut reader = Reader::from_str(svg);
        let mut elements = Vec::new();
        let mut open: Vec<usize> = Vec::new();

        loop {
            match reader.read_event().expect("well-formed svg") {
                Event::Start(start) => {
                    open.push(elements.len());
                    elements.push(element(&start));
                }
                Event::Empty(start) => elements.push(element(&start)),
                Event::End(_) => {
                    open.pop();
                }
                Event::Text(text) => {
                    if let Some(&idx) = open.last() {
                        elements[idx].text.push_str(&String::from_utf8_lossy(&text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        assert!(open.is_empty(), "unclosed elements");
        elements
    }

    fn render(stats: &StatsSnapshot, assets: &EmbeddedAssets) -> String {
        let config = RenderConfig::default();
        let icons = IconSet::default();
        render_card(stats, &config, assets, &icons).expect("render")
    }

    fn translate_x(transform: &str) -> &str {
        transform
            .trim_start_matches("translate(")
            .split(',')
            .next()
            .unwrap_or_default()
    }

    #[test]
    fn octocat_card() {
        let svg = render(&octocat(), &EmbeddedAssets::default());
        let elements = parse(&svg);

        let segments: Vec<_> = elements
            .iter()
            .filter(|e| e.name == "circle" && e.has_class("language-segment"))
            .collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].attr("stroke"), Some("#00ADD8"));
        assert_eq!(segments[1].attr("stroke"), Some("#DEA584"));
        assert_eq!(segments[0].attr("stroke-dashoffset"), Some("0"));

        let legend: Vec<_> = elements
            .iter()
            .filter(|e| e.name == "g" && e.has_class("language-entry"))
            .collect();
        assert_eq!(legend.len(), 2);
        let first_column = fmt_num(CardGeometry::new(&RenderConfig::default()).legend.first_column_x);
        for entry in &legend {
            assert_eq!(translate_x(entry.attr("transform").expect("transform")), first_column);
        }

        let letter = elements
            .iter()
            .find(|e| e.has_class("rank-letter"))
            .expect("rank letter");
        assert_eq!(letter.text, "A+");

        let percentage = elements
            .iter()
            .find(|e| e.has_class("rank-percentage"))
            .expect("rank percentage");
        assert_eq!(percentage.text, "93.2%");

        let title = elements.iter().find(|e| e.has_class("title")).expect("title");
        assert!(title.text.contains("octocat"));

        assert!(svg.contains("60.00%"));
        assert!(svg.contains("40.00%"));
        assert!(svg.contains("https://github.com/octocat"));
    }

    #[test]
    fn percentage_labels_round_halves_up() {
        let mut stats = octocat();
        stats.merged_prs_percentage = 12.5;
        stats.rank.percentile = 93.25;
        stats.language_percentages =
            IndexMap::from([("Go".to_string(), 12.125), ("Rust".to_string(), 87.875)]);

        let svg = render(&stats, &EmbeddedAssets::default());
        let elements = parse(&svg);

        let percentage = elements
            .iter()
            .find(|e| e.has_class("rank-percentage"))
            .expect("rank percentage");
        assert_eq!(percentage.text, "93.3%");
        assert!(elements.iter().any(|e| e.name == "text" && e.text == "13%"));
        assert!(svg.contains("12.13%"));
        assert!(!svg.contains("12.12%"));
    }

    #[test]
    fn one_row_per_counter_with_staggered_classes() {
        let svg = render(&octocat(), &EmbeddedAssets::default());
        let rows: Vec<_> = parse(&svg)
            .into_iter()
            .filter(|e| e.has_class("stat-row"))
            .collect();

        assert_eq!(rows.len(), animation::STAT_ROW_COUNT);
        for (i, row) in rows.iter().enumerate() {
            assert!(row.has_class(&format!("animate-delay-{}", i + 1)));
        }
        assert!(svg.contains(".animate-delay-2 { animation-delay: 0.08s, 0.18s; }"));
        assert!(svg.contains(".animate-delay-13 { animation-delay: 0.96s, 1.06s; }"));
        assert!(svg.contains(r#"<text x="300" y="0" class="value">1337</text>"#));
    }

    #[test]
    fn rank_track_and_fill_keyframes() {
        let svg = render(&octocat(), &EmbeddedAssets::default());
        let elements = parse(&svg);

        let track = elements
            .iter()
            .find(|e| e.has_class("rank-circle-bg"))
            .expect("rank track");
        assert_eq!(track.attr("stroke"), Some("#00484d"));

        let geometry = CardGeometry::new(&RenderConfig::default());
        let progress = geometry.rank_progress(93.2);
        assert!(svg.contains(&format!(
            "from {{ stroke-dashoffset: {}; }} to {{ stroke-dashoffset: {}; }}",
            fmt_num(progress.circumference),
            fmt_num(progress.target_offset)
        )));
    }

    #[test]
    fn free_text_is_escaped() {
        let mut stats = octocat();
        stats.name = "<script>&co".to_string();
        stats
            .language_percentages
            .insert("C<&>".to_string(), 0.0);

        let svg = render(&stats, &EmbeddedAssets::default());
        parse(&svg);
        assert!(svg.contains("&lt;script&gt;&amp;co's GitHub Stats"));
        assert!(svg.contains("C&lt;&amp;&gt;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn missing_color_renders_gray() {
        let mut stats = octocat();
        stats.top_languages.shift_remove("Rust");

        let elements = parse(&render(&stats, &EmbeddedAssets::default()));
        let rust = elements
            .iter()
            .filter(|e| e.has_class("language-segment"))
            .nth(1)
            .expect("second segment");
        assert_eq!(rust.attr("stroke"), Some("#cccccc"));

        let swatches: Vec<_> = elements
            .iter()
            .filter(|e| e.name == "rect" && e.attr("fill") == Some("#cccccc"))
            .collect();
        assert_eq!(swatches.len(), 1);
    }

    #[test]
    fn image_and_fonts_are_inlined() {
        let mut assets = EmbeddedAssets::default()
            .with_image(EmbeddedImage::from_bytes(&wide_gif()).expect("gif"));
        assets
            .fonts
            .insert("Rajdhani-Regular".to_string(), "AAEC".to_string());

        let svg = render(&octocat(), &assets);
        let elements = parse(&svg);

        let image = elements.iter().find(|e| e.name == "image").expect("image");
        assert!(image.attr("href").is_some_and(|h| h.starts_with("data:image/gif;base64,")));
        assert_eq!(image.attr("height"), Some("140"));
        assert_eq!(image.attr("width"), Some("280"));
        assert_eq!(image.attr("x"), Some("410"));
        assert_eq!(image.attr("y"), Some("390"));

        assert!(svg.contains("font-family: 'Rajdhani'; src: url('data:font/truetype;charset=utf-8;base64,AAEC')"));
        assert!(!svg.contains("font-family: 'ChakraPetch'; src:"));
    }

    #[test]
    fn second_column_starts_at_eleventh_language() {
        let mut stats = octocat();
        stats.language_percentages = (0..12)
            .map(|i| (format!("L{i}"), 100.0 / 12.0))
            .collect();

        let geometry = CardGeometry::new(&RenderConfig::default());
        let elements = parse(&render(&stats, &EmbeddedAssets::default()));
        let xs: Vec<_> = elements
            .iter()
            .filter(|e| e.has_class("language-entry"))
            .map(|e| translate_x(e.attr("transform").expect("transform")).to_string())
            .collect();

        assert_eq!(xs.len(), 12);
        assert!(xs[..10].iter().all(|x| *x == fmt_num(geometry.legend.first_column_x)));
        assert!(xs[10..].iter().all(|x| *x == fmt_num(geometry.legend.second_column_x)));
    }

    #[test]
    fn invalid_inputs_fail_before_output() {
        let assets = EmbeddedAssets::default();
        let icons = IconSet::default();

        let mut config = RenderConfig::default();
        config.rank.ring_bg_base = "cyan".to_string();
        assert!(CardRenderer::new(&config, &assets, &icons).is_err());

        let config = RenderConfig::default();
        let renderer = CardRenderer::new(&config, &assets, &icons).expect("renderer");
        let mut stats = octocat();
        stats.rank.percentile = f64::NAN;
        assert!(matches!(renderer.render(&stats), Err(CardError::InvalidStats(_))));
    }

    #[test]
    fn renders_are_independent_and_deterministic() {
        let config = RenderConfig::default();
        let assets = EmbeddedAssets::default();
        let icons = IconSet::default();
        let renderer = CardRenderer::new(&config, &assets, &icons).expect("renderer");
        let stats = octocat();

        let outputs: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| renderer.render(&stats).expect("render")))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread"))
                .collect()
        });

        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    }
}
