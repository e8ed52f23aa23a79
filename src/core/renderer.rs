use crate::domain::model::{Person, Photo};
use crate::domain::ports::MarkupSink;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Photos dated strictly after the first day of 2019 count as recent.
pub fn recent_date_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid calendar date")
}

/// Formats a photo date as abbreviated weekday/month, zero-padded day,
/// year, e.g. `Wed Jan 01 2020`.
fn format_photo_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Writes a person's profile fragment: name paragraph, thumbnail
/// placeholder, then the photo's title/date/location paragraphs.
/// Exactly five chunks, in that order.
pub fn render_person<S: MarkupSink + ?Sized>(sink: &mut S, person: &Person) -> Result<()> {
    sink.write_chunk(&format!("<p>{}</p>\n", person.name))?;
    emit_photo_fields(sink, &person.photo, true)
}

/// Writes a `<div>`-wrapped fragment for each photo dated strictly
/// after the recent cutoff, preserving input order. No thumbnail
/// placeholder in this listing.
pub fn list_recent_photos<S: MarkupSink + ?Sized>(sink: &mut S, photos: &[Photo]) -> Result<()> {
    let cutoff = recent_date_cutoff();
    for photo in photos.iter().filter(|p| p.date > cutoff) {
        sink.write_chunk("<div>\n")?;
        emit_photo_fields(sink, photo, false)?;
        sink.write_chunk("</div>\n")?;
    }
    Ok(())
}

// Single emission path for photo fields; `with_thumbnail` controls the
// fixed placeholder paragraph that only the profile view carries.
fn emit_photo_fields<S: MarkupSink + ?Sized>(
    sink: &mut S,
    photo: &Photo,
    with_thumbnail: bool,
) -> Result<()> {
    if with_thumbnail {
        sink.write_chunk("<p>🌃</p>\n")?;
    }
    sink.write_chunk(&format!("<p>title: {}</p>\n", photo.title))?;
    sink.write_chunk(&format!("<p>date: {}</p>\n", format_photo_date(photo.date)))?;
    sink.write_chunk(&format!("<p>location: {}</p>\n", photo.location))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::VecSink;

    fn photo(title: &str, year: i32, month: u32, day: u32) -> Photo {
        Photo {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            location: "Paris".to_string(),
        }
    }

    #[test]
    fn render_person_emits_five_chunks_in_order() {
        let person = Person {
            name: "John Doe".to_string(),
            photo: photo("My Photo", 2020, 1, 1),
        };
        let mut sink = VecSink::new();

        render_person(&mut sink, &person).unwrap();

        assert_eq!(
            sink.chunks(),
            &[
                "<p>John Doe</p>\n",
                "<p>🌃</p>\n",
                "<p>title: My Photo</p>\n",
                "<p>date: Wed Jan 01 2020</p>\n",
                "<p>location: Paris</p>\n",
            ]
        );
    }

    #[test]
    fn list_recent_photos_keeps_only_dates_after_cutoff() {
        let photos = vec![
            photo("Photo 1", 2020, 1, 1),
            photo("Photo 2", 2019, 1, 1),
            photo("Photo 3", 2018, 1, 1),
        ];
        let mut sink = VecSink::new();

        list_recent_photos(&mut sink, &photos).unwrap();

        assert_eq!(
            sink.chunks(),
            &[
                "<div>\n",
                "<p>title: Photo 1</p>\n",
                "<p>date: Wed Jan 01 2020</p>\n",
                "<p>location: Paris</p>\n",
                "</div>\n",
            ]
        );
    }

    #[test]
    fn cutoff_date_itself_is_not_recent() {
        let photos = vec![photo("At Cutoff", 2019, 1, 1)];
        let mut sink = VecSink::new();

        list_recent_photos(&mut sink, &photos).unwrap();

        assert!(sink.chunks().is_empty());
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let photos = vec![
            photo("First", 2020, 3, 14),
            photo("Skipped", 2017, 6, 1),
            photo("Second", 2019, 1, 2),
            photo("Third", 2021, 12, 31),
        ];
        let mut sink = VecSink::new();

        list_recent_photos(&mut sink, &photos).unwrap();

        let titles: Vec<&String> = sink
            .chunks()
            .iter()
            .filter(|c| c.starts_with("<p>title: "))
            .collect();
        assert_eq!(
            titles,
            &[
                "<p>title: First</p>\n",
                "<p>title: Second</p>\n",
                "<p>title: Third</p>\n",
            ]
        );
    }

    #[test]
    fn date_format_matches_abbreviated_weekday_month_day_year() {
        assert_eq!(
            format_photo_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
            "Wed Jan 01 2020"
        );
        assert_eq!(
            format_photo_date(NaiveDate::from_ymd_opt(2019, 1, 2).unwrap()),
            "Wed Jan 02 2019"
        );
    }
}
