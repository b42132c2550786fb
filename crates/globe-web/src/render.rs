//! DOM presentation of the globe.
//!
//! The element tree is built once at startup; each frame only rewrites
//! inline styles from the projection of every album at the current rotation.

use crate::constants::*;
use crate::dom;
use fnv::FnvHashMap;
use globe_core::{
    project, ring_glyphs, starfield, tilt_rad, Album, DecorFrame, GlobeLayout, ProjectionParams,
    ThumbnailStyle, RING_RADIUS_PX, RING_TEXT, SHOOTING_STARS, STAR_COUNT, STAR_SEED,
    THUMBNAIL_FALLBACK_URL, Z_INDEX_BASE,
};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct SatelliteElements {
    root: web::HtmlElement,
    tether: web::HtmlElement,
    label: web::HtmlElement,
}

pub struct SceneElements {
    surface: web::HtmlElement,
    clouds: web::HtmlElement,
    ring: web::HtmlElement,
    satellites: FnvHashMap<String, SatelliteElements>,
}

/// Called with the album index when a thumbnail receives a pointer-down.
pub type PressHandler = Rc<dyn Fn(usize)>;

pub fn build_starfield(document: &web::Document, parent: &web::Node) -> anyhow::Result<()> {
    let sky = dom::create(document, "div", "stars-container")?;
    for star in starfield(STAR_COUNT, STAR_SEED) {
        let el = dom::create(document, "div", "star")?;
        dom::set_style(
            &el,
            &[
                ("left", &format!("{}%", star.left_pct)),
                ("top", &format!("{}%", star.top_pct)),
                ("width", &format!("{}px", star.width_px)),
                ("height", &format!("{}px", star.height_px)),
                ("animation-delay", &format!("{}s", star.delay_sec)),
                ("opacity", &star.opacity.to_string()),
            ],
        );
        dom::append(&sky, &el);
    }
    for s in SHOOTING_STARS {
        let el = dom::create(document, "div", "shooting-star")?;
        dom::set_style(
            &el,
            &[
                ("top", &format!("{}%", s.top_pct)),
                ("left", &format!("{}%", s.left_pct)),
                ("animation-delay", &format!("{}s", s.delay_sec)),
            ],
        );
        dom::append(&sky, &el);
    }
    dom::append(parent, &sky);
    Ok(())
}

pub fn build_header(document: &web::Document, parent: &web::Node) -> anyhow::Result<()> {
    let header = dom::create(document, "header", "joy-header")?;
    let titles = dom::create(document, "div", "")?;
    let h1 = dom::create(document, "h1", "joy-title")?;
    let accent = dom::create(document, "span", "joy-title-accent")?;
    accent.set_text_content(Some(TITLE_ACCENT));
    let main = dom::create(document, "span", "joy-title-main")?;
    main.set_text_content(Some(TITLE_MAIN));
    dom::append(&h1, &accent);
    _ = h1.append_with_str_1(" ");
    dom::append(&h1, &main);
    let sub = dom::create(document, "p", "joy-subtitle")?;
    sub.set_text_content(Some(SUBTITLE));
    dom::append(&titles, &h1);
    dom::append(&titles, &sub);

    let logo_frame = dom::create(document, "div", "joy-logo")?;
    let logo = dom::create_image(document, "")?;
    logo.set_src(LOGO_URL);
    logo.set_alt("Eagle Logo");
    dom::append(&logo_frame, &logo);

    dom::append(&header, &titles);
    dom::append(&header, &logo_frame);
    dom::append(parent, &header);

    let hint = dom::create_with_id(document, "div", TAP_HINT_ID, "tap-hint")?;
    hint.set_text_content(Some(TAP_HINT));
    dom::append(parent, &hint);
    Ok(())
}

/// Build the tilted sphere group and one satellite per album inside `stage`.
pub fn build_scene(
    document: &web::Document,
    stage: &web::HtmlElement,
    layout: &GlobeLayout,
    on_press: PressHandler,
) -> anyhow::Result<SceneElements> {
    let container = dom::create(document, "div", "perspective-container")?;

    let tilted = dom::create(document, "div", "tilted-axis-group")?;
    dom::set_style(
        &tilted,
        &[("transform", &format!("rotateZ({}deg)", tilt_rad().to_degrees()))],
    );

    let surface = dom::create(document, "div", "earth-3d")?;
    dom::set_style(
        &surface,
        &[
            ("background-image", &format!("url('{}')", SURFACE_TEXTURE_URL)),
            ("z-index", &Z_INDEX_BASE.to_string()),
        ],
    );
    let clouds = dom::create(document, "div", "earth-clouds")?;
    dom::set_style(
        &clouds,
        &[
            ("background-image", &format!("url('{}')", CLOUD_TEXTURE_URL)),
            ("z-index", &(Z_INDEX_BASE + 1).to_string()),
        ],
    );
    let ring = dom::create(document, "div", "text-ring-rotator")?;
    for glyph in ring_glyphs(RING_TEXT) {
        let span = dom::create(document, "span", "ring-glyph")?;
        span.set_text_content(Some(&glyph.ch.to_string()));
        dom::set_style(
            &span,
            &[(
                "transform",
                &format!("rotateY({}deg) translateZ({}px)", glyph.angle_deg, RING_RADIUS_PX),
            )],
        );
        dom::append(&ring, &span);
    }
    dom::append(&tilted, &surface);
    dom::append(&tilted, &clouds);
    dom::append(&tilted, &ring);
    dom::append(&container, &tilted);

    let mut satellites = FnvHashMap::default();
    for (album, entry) in layout.iter() {
        let sat = build_satellite(document, album, entry.album_index, on_press.clone())?;
        dom::append(&container, &sat.tether);
        dom::append(&container, &sat.root);
        satellites.insert(album.id.clone(), sat);
    }
    dom::append(stage, &container);
    log::info!("[render] scene built with {} satellites", satellites.len());

    Ok(SceneElements {
        surface,
        clouds,
        ring,
        satellites,
    })
}

fn build_satellite(
    document: &web::Document,
    album: &Album,
    album_index: usize,
    on_press: PressHandler,
) -> anyhow::Result<SatelliteElements> {
    let style = ThumbnailStyle::for_album(album);

    let tether = dom::create(document, "div", "tether")?;
    dom::set_style(
        &tether,
        &[
            ("background-color", style.theme.tether_color()),
            ("box-shadow", style.theme.tether_glow()),
        ],
    );

    let root = dom::create(document, "div", "satellite")?;
    _ = root.set_attribute("data-album-id", &album.id);
    let group = dom::create(document, "div", "satellite-group")?;
    let frame = dom::create(document, "div", &format!("thumb-frame {}", style.theme.class_name()))?;
    let img = dom::create_image(document, &format!("thumb {}", style.size.class_name()))?;
    img.set_src(album.cover());
    img.set_alt("");
    img.set_draggable(false);
    dom::use_fallback_on_error(&img, THUMBNAIL_FALLBACK_URL);
    let label = dom::create(document, "div", &format!("thumb-label {}", style.theme.class_name()))?;
    label.set_text_content(Some(&album.author));

    dom::append(&frame, &img);
    dom::append(&group, &frame);
    dom::append(&group, &label);
    dom::append(&root, &group);

    // Runs before the stage's own pointerdown since the event bubbles up to it.
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        on_press(album_index);
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();

    Ok(SatelliteElements {
        root,
        tether,
        label,
    })
}

impl SceneElements {
    /// Restyle every layer for `rotation`. Reads state only.
    pub fn update(&self, layout: &GlobeLayout, rotation: f32, params: &ProjectionParams) {
        let decor = DecorFrame::at(rotation);
        dom::set_style(
            &self.surface,
            &[("background-position", &format!("{}% 0", decor.surface_pan_pct))],
        );
        dom::set_style(
            &self.clouds,
            &[
                ("background-position", &format!("{}% 0", decor.cloud_pan_pct)),
                ("transform", &format!("rotateY({}deg)", decor.cloud_spin_deg)),
            ],
        );
        dom::set_style(
            &self.ring,
            &[("transform", &format!("rotateY({}deg)", decor.ring_spin_deg))],
        );

        for (album, entry) in layout.iter() {
            let Some(sat) = self.satellites.get(&album.id) else {
                continue;
            };
            let pt = project(entry.base, rotation, params);

            dom::set_visible(&sat.root, !pt.is_hidden(), "flex");
            if !pt.is_hidden() {
                dom::set_style(
                    &sat.root,
                    &[
                        (
                            "transform",
                            &format!(
                                "translate3d({}px, {}px, 0) scale({})",
                                pt.satellite.x, pt.satellite.y, pt.scale
                            ),
                        ),
                        ("z-index", &pt.z_index.to_string()),
                        ("opacity", &pt.opacity.to_string()),
                    ],
                );
            }
            dom::set_visible(&sat.label, pt.shows_label(), "block");

            dom::set_visible(&sat.tether, pt.tether_visible(), "block");
            if pt.tether_visible() {
                dom::set_style(
                    &sat.tether,
                    &[
                        ("width", &format!("{}px", pt.tether.length)),
                        (
                            "transform",
                            &format!(
                                "translate3d({}px, {}px, 0) rotate({}deg)",
                                pt.anchor.x, pt.anchor.y, pt.tether.angle_deg
                            ),
                        ),
                        ("z-index", &pt.tether_z_index().to_string()),
                        ("opacity", &pt.tether_opacity().to_string()),
                    ],
                );
            }
        }
    }
}

pub fn set_tap_hint_visible(document: &web::Document, visible: bool) {
    if let Some(el) = dom::html_by_id(document, TAP_HINT_ID) {
        dom::set_visible(&el, visible, "block");
    }
}
