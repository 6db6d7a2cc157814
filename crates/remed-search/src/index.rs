use tantivy::{Index, IndexWriter, TantivyDocument};
use tracing::info;

use remed_core::schema::{build_schema, doc_type, field, get_field};

use crate::error::SearchError;

/// Resolved field handles for document construction.
struct Fields {
    id: tantivy::schema::Field,
    doc_type: tantivy::schema::Field,
    title: tantivy::schema::Field,
    body: tantivy::schema::Field,
    category: tantivy::schema::Field,
}

impl Fields {
    fn resolve(schema: &tantivy::schema::Schema) -> Self {
        Self {
            id: get_field(schema, field::ID),
            doc_type: get_field(schema, field::DOC_TYPE),
            title: get_field(schema, field::TITLE),
            body: get_field(schema, field::BODY),
            category: get_field(schema, field::CATEGORY),
        }
    }
}

fn add_doc(
    writer: &IndexWriter,
    fields: &Fields,
    id: &str,
    doc_type: &str,
    title: &str,
    body: &str,
    category: &str,
) -> Result<(), SearchError> {
    let mut doc = TantivyDocument::default();
    doc.add_text(fields.id, id);
    doc.add_text(fields.doc_type, doc_type);
    doc.add_text(fields.title, title);
    doc.add_text(fields.body, body);
    doc.add_text(fields.category, category);
    writer.add_document(doc)?;
    Ok(())
}

/// Build the in-RAM index over every reference catalog and the calculator
/// registry.
pub fn build_index() -> Result<Index, SearchError> {
    let schema = build_schema();
    let index = Index::create_in_ram(schema.clone());
    let fields = Fields::resolve(&schema);
    let mut writer: IndexWriter = index.writer(50_000_000)?;

    for item in remed_reference::abbreviations::all() {
        let mut body = format!("{} {}", item.full_form, item.description);
        for variant in &item.variants {
            body.push(' ');
            body.push_str(variant);
        }
        if let Some(notes) = &item.notes {
            body.push(' ');
            body.push_str(notes);
        }
        add_doc(
            &writer,
            &fields,
            &item.id,
            doc_type::ABBREVIATION,
            &format!("{} — {}", item.primary_abbr, item.full_form),
            &body,
            &item.category,
        )?;
    }

    for item in remed_reference::terminology::all() {
        let mut body = item.definition.clone();
        for extra in [&item.example, &item.etymology, &item.notes].into_iter().flatten() {
            body.push(' ');
            body.push_str(extra);
        }
        for variant in &item.variants {
            body.push(' ');
            body.push_str(variant);
        }
        add_doc(
            &writer,
            &fields,
            &item.id,
            doc_type::TERMINOLOGY,
            &item.primary_term,
            &body,
            &item.category,
        )?;
    }

    for item in remed_reference::lab_values::all() {
        let title = match &item.short_name {
            Some(short) => format!("{} ({short})", item.test_name),
            None => item.test_name.clone(),
        };
        let mut body = item.description.clone();
        if let Some(notes) = &item.notes {
            body.push(' ');
            body.push_str(notes);
        }
        add_doc(
            &writer,
            &fields,
            &item.id,
            doc_type::LAB_VALUE,
            &title,
            &body,
            &item.category,
        )?;
    }

    for item in remed_reference::mnemonics::all() {
        add_doc(
            &writer,
            &fields,
            &item.id,
            doc_type::MNEMONIC,
            &format!("{} — {}", item.mnemonic, item.topic),
            &item.stands_for,
            &item.category,
        )?;
    }

    for item in remed_reference::nutrition::all() {
        let mut body = item.content.join(" ");
        for sub in &item.subsections {
            body.push(' ');
            body.push_str(&sub.title);
            body.push(' ');
            body.push_str(&sub.content.join(" "));
        }
        add_doc(
            &writer,
            &fields,
            &item.id,
            doc_type::NUTRITION,
            &item.title,
            &body,
            "Nutrition",
        )?;
    }

    for item in remed_reference::procedures::all() {
        let mut body = format!("{} {}", item.description, item.keywords.join(" "));
        body.push(' ');
        body.push_str(&item.indications.join(" "));
        add_doc(
            &writer,
            &fields,
            &item.id,
            doc_type::PROCEDURE,
            &item.name,
            &body,
            "Procedures",
        )?;
    }

    for calc in remed_calculators::all_calculators() {
        add_doc(
            &writer,
            &fields,
            calc.id(),
            doc_type::CALCULATOR,
            calc.name(),
            &calc.keywords().join(" "),
            "Calculators",
        )?;
    }

    writer.commit()?;
    info!("search index built in RAM");
    Ok(index)
}
