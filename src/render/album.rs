use crate::models::album::Album;

use super::html_escape;

/// Cover grid of every album. Each tile carries its index for click routing.
pub fn render_album_grid(albums: &[Album]) -> String {
    let mut html = String::from("<div class=\"albums__grid\">");
    for (i, album) in albums.iter().enumerate() {
        let desc = if album.description.is_empty() {
            String::new()
        } else {
            format!(
                "<p class=\"album-cover__desc\">{}</p>",
                html_escape(&album.description)
            )
        };
        html.push_str(&format!(
            "<div class=\"album-cover\" data-index=\"{i}\" data-slug=\"{slug}\">\
<div class=\"album-cover__img\">\
<img src=\"{cover}\" alt=\"{title}\" loading=\"lazy\" onerror=\"this.style.display='none'\">\
<div class=\"album-cover__placeholder\">{count} photos</div></div>\
<h3 class=\"album-cover__title\">{title}</h3>{desc}</div>",
            i = i,
            slug = html_escape(&album.slug()),
            cover = html_escape(&album.cover),
            title = html_escape(&album.title),
            count = album.photos.len(),
            desc = desc,
        ));
    }
    html.push_str("</div>");
    html
}

/// Single-album view: back button, title, photo gallery.
pub fn render_album_expanded(album: &Album) -> String {
    let desc = if album.description.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"album-expanded__desc\">{}</p>",
            html_escape(&album.description)
        )
    };
    let title = html_escape(&album.title);
    let photos: String = album
        .photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            format!(
                "<div class=\"gallery__item\" data-photo=\"{}\">\
<img src=\"{}\" alt=\"{}\" loading=\"lazy\" onerror=\"this.style.display='none'\">\
<div class=\"gallery__placeholder\">Photo</div></div>",
                i,
                html_escape(photo),
                title
            )
        })
        .collect();

    format!(
        "<button class=\"album-expanded__back\">&larr; All Albums</button>\
<h2 class=\"album-expanded__title\">{}</h2>{}<div class=\"gallery__grid\">{}</div>",
        title, desc, photos
    )
}
