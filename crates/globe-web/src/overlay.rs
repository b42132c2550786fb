use crate::constants::*;
use crate::dom;
use globe_core::{Album, Carousel, DetailCard, AVATAR_FALLBACK_URL, DETAIL_DEFAULT_IMAGE_URL};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the (hidden) album detail overlay under `parent`.
pub fn build(document: &web::Document, parent: &web::Node) -> anyhow::Result<()> {
    let backdrop = dom::create_with_id(document, "div", OVERLAY_ID, "album-overlay hidden")?;
    let card = dom::create_with_id(document, "div", OVERLAY_CARD_ID, "album-card")?;

    // header: avatar, author, timestamp, close button
    let top = dom::create(document, "div", "album-top")?;
    let who = dom::create(document, "div", "album-who")?;
    let avatar = dom::create_image(document, "album-avatar")?;
    avatar.set_id(OVERLAY_AVATAR_ID);
    dom::use_fallback_on_error(&avatar, AVATAR_FALLBACK_URL);
    let names = dom::create(document, "div", "album-names")?;
    let author = dom::create_with_id(document, "span", OVERLAY_AUTHOR_ID, "album-author")?;
    let stamp = dom::create_with_id(document, "span", OVERLAY_TIMESTAMP_ID, "album-timestamp")?;
    dom::append(&names, &author);
    dom::append(&names, &stamp);
    dom::append(&who, &avatar);
    dom::append(&who, &names);
    let close = dom::create_with_id(document, "button", OVERLAY_CLOSE_ID, "album-close")?;
    close.set_text_content(Some("\u{2715}"));
    dom::append(&top, &who);
    dom::append(&top, &close);

    // image pager
    let viewer = dom::create(document, "div", "album-viewer")?;
    let image = dom::create_image(document, "album-image")?;
    image.set_id(OVERLAY_IMAGE_ID);
    image.set_alt("Joy Moment");
    dom::use_fallback_on_error(&image, DETAIL_DEFAULT_IMAGE_URL);
    let prev = dom::create_with_id(document, "button", OVERLAY_PREV_ID, "album-nav album-prev")?;
    prev.set_text_content(Some("\u{2039}"));
    let next = dom::create_with_id(document, "button", OVERLAY_NEXT_ID, "album-nav album-next")?;
    next.set_text_content(Some("\u{203a}"));
    let dots = dom::create_with_id(document, "div", OVERLAY_DOTS_ID, "album-dots")?;
    dom::append(&viewer, &image);
    dom::append(&viewer, &prev);
    dom::append(&viewer, &next);
    dom::append(&viewer, &dots);

    // body: message and footer
    let body = dom::create(document, "div", "album-body")?;
    let message = dom::create_with_id(document, "p", OVERLAY_MESSAGE_ID, "album-message")?;
    let footer = dom::create(document, "div", "album-footer")?;
    let brand = dom::create(document, "div", "album-brand")?;
    brand.set_text_content(Some(FOOTER_BRAND));
    let category = dom::create_with_id(document, "span", OVERLAY_CATEGORY_ID, "album-category")?;
    dom::append(&footer, &brand);
    dom::append(&footer, &category);
    dom::append(&body, &message);
    dom::append(&body, &footer);

    dom::append(&card, &top);
    dom::append(&card, &viewer);
    dom::append(&card, &body);
    dom::append(&backdrop, &card);
    dom::append(parent, &backdrop);
    Ok(())
}

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn image_by_id(document: &web::Document, id: &str) -> Option<web::HtmlImageElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
}

/// Fill the card for `album` and fade the overlay in.
pub fn show(document: &web::Document, album: &Album, carousel: &Carousel) {
    let card = DetailCard::for_album(album);
    if let Some(img) = image_by_id(document, OVERLAY_AVATAR_ID) {
        img.set_src(&card.avatar_url);
        img.set_alt(&card.author);
    }
    set_text(document, OVERLAY_AUTHOR_ID, &card.author);
    set_text(document, OVERLAY_TIMESTAMP_ID, &card.timestamp);
    set_text(document, OVERLAY_MESSAGE_ID, &card.message);
    set_text(document, OVERLAY_CATEGORY_ID, card.category);
    if let Some(el) = document.get_element_by_id(OVERLAY_MESSAGE_ID) {
        let cl = el.class_list();
        _ = cl.toggle_with_force("empty", !card.has_message);
    }
    update_image(document, carousel);

    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
    }
}

/// Refresh the pager: current image, arrows and dots.
pub fn update_image(document: &web::Document, carousel: &Carousel) {
    if let Some(img) = image_by_id(document, OVERLAY_IMAGE_ID) {
        img.set_src(carousel.current());
    }
    let nav = carousel.has_navigation();
    for id in [OVERLAY_PREV_ID, OVERLAY_NEXT_ID] {
        if let Some(el) = dom::html_by_id(document, id) {
            dom::set_visible(&el, nav, "block");
        }
    }
    if let Some(dots) = dom::html_by_id(document, OVERLAY_DOTS_ID) {
        dots.set_inner_html("");
        if nav {
            for i in 0..carousel.len() {
                let class = if i == carousel.index() { "dot active" } else { "dot" };
                if let Ok(dot) = dom::create(document, "div", class) {
                    dom::append(&dots, &dot);
                }
            }
        }
        dom::set_visible(&dots, nav, "flex");
    }
}

/// Start the exit transition; the element stays in the tree.
#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
    }
}
