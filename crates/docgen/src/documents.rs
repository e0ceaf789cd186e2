//! The five sample documents.
//!
//! One function per document, each a linear sequence of layout calls —
//! the files are fixed demo props, so there is nothing to parameterise.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfDocumentReference};
use tracing::info;

use crate::error::DocGenError;
use crate::page::{PageWriter, TableCell, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// File names of the generated documents, in generation order.
pub const SAMPLE_DOCUMENTS: [&str; 5] = [
    "Invoice_2026_001.pdf",
    "Service_Agreement_2026.pdf",
    "Employment_Offer_Onyango.pdf",
    "Data_Protection_Policy.pdf",
    "Memo_System_Maintenance.pdf",
];

/// Generate all five sample documents into `output_dir` (created if absent).
/// Returns the written paths in generation order.
pub fn generate_all(output_dir: &Path) -> Result<Vec<PathBuf>, DocGenError> {
    fs::create_dir_all(output_dir)?;

    let paths = vec![
        create_invoice(output_dir)?,
        create_contract(output_dir)?,
        create_employment_letter(output_dir)?,
        create_policy_document(output_dir)?,
        create_memo(output_dir)?,
    ];

    info!("generated {} sample documents in {}", paths.len(), output_dir.display());
    Ok(paths)
}

fn today() -> String {
    Local::now().format("%d %B %Y").to_string()
}

fn new_document(title: &str) -> Result<(PdfDocumentReference, PageWriter), DocGenError> {
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let writer = PageWriter::new(doc.get_page(page).get_layer(layer), regular, bold);
    Ok((doc, writer))
}

fn save_document(doc: PdfDocumentReference, path: &Path) -> Result<(), DocGenError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)?;
    Ok(())
}

/// Sample invoice for the Finance department.
pub fn create_invoice(output_dir: &Path) -> Result<PathBuf, DocGenError> {
    let (doc, mut page) = new_document("Invoice INV-2026-001")?;

    page.title("INVOICE");
    page.spacer(5.0);

    page.bold_line("Acme Supplies Ltd");
    page.text_line("123 Industrial Area, Nairobi");
    page.text_line("Tel: +254 20 123 4567");
    page.spacer(10.0);

    page.text_line("Invoice No: INV-2026-001");
    page.text_line(&format!("Date: {}", today()));
    page.text_line("Bill To: Datacraft Kenya Ltd");
    page.spacer(10.0);

    let rows = vec![
        vec![
            TableCell::new("Item"),
            TableCell::new("Qty"),
            TableCell::new("Unit Price (KES)"),
            TableCell::new("Total (KES)"),
        ],
        vec![
            TableCell::new("Office Supplies"),
            TableCell::new("10"),
            TableCell::new("5,000"),
            TableCell::new("50,000"),
        ],
        vec![
            TableCell::new("Computer Equipment"),
            TableCell::new("2"),
            TableCell::new("85,000"),
            TableCell::new("170,000"),
        ],
        vec![
            TableCell::new("Software License"),
            TableCell::new("5"),
            TableCell::new("12,000"),
            TableCell::new("60,000"),
        ],
        vec![
            TableCell::new(""),
            TableCell::new(""),
            TableCell::bold("Subtotal:"),
            TableCell::bold("280,000"),
        ],
        vec![
            TableCell::new(""),
            TableCell::new(""),
            TableCell::bold("VAT (16%):"),
            TableCell::bold("44,800"),
        ],
        vec![
            TableCell::new(""),
            TableCell::new(""),
            TableCell::bold("TOTAL:"),
            TableCell::bold("324,800"),
        ],
    ];
    page.table(&rows, &[74.0, 18.0, 39.0, 39.0]);
    page.spacer(10.0);

    page.text_line("Payment Terms: Net 30 days");

    let path = output_dir.join(SAMPLE_DOCUMENTS[0]);
    save_document(doc, &path)?;
    Ok(path)
}

/// Sample service agreement for the Legal department.
pub fn create_contract(output_dir: &Path) -> Result<PathBuf, DocGenError> {
    let (doc, mut page) = new_document("Service Agreement 2026")?;

    page.title("SERVICE AGREEMENT");
    page.spacer(5.0);
    page.text_line(&format!("Date: {}", today()));
    page.spacer(10.0);

    page.heading("PARTIES");
    page.text_line("This Agreement is entered into between:");
    page.bold_line("Datacraft Kenya Ltd (\"Client\")");
    page.text_line("and");
    page.bold_line("TechSolutions Africa Ltd (\"Provider\")");
    page.spacer(10.0);

    page.heading("1. SERVICES");
    page.paragraph(
        "The Provider agrees to deliver document management system implementation services \
         including software deployment, customization, and staff training.",
    );
    page.spacer(5.0);

    page.heading("2. TERM");
    page.paragraph(
        "This Agreement shall commence on 1 February 2026 and continue for a period of \
         twelve (12) months unless terminated earlier in accordance with Section 5.",
    );
    page.spacer(5.0);

    page.heading("3. COMPENSATION");
    page.paragraph(
        "Client shall pay Provider a total fee of KES 2,500,000 payable in three installments.",
    );
    page.spacer(5.0);

    page.heading("4. CONFIDENTIALITY");
    page.paragraph(
        "Both parties agree to maintain strict confidentiality of all proprietary information \
         exchanged during the term of this Agreement.",
    );
    page.spacer(20.0);

    page.signature_line("Authorized Signatory - Client");
    page.spacer(10.0);
    page.signature_line("Authorized Signatory - Provider");

    let path = output_dir.join(SAMPLE_DOCUMENTS[1]);
    save_document(doc, &path)?;
    Ok(path)
}

/// Sample employment offer for the HR department.
pub fn create_employment_letter(output_dir: &Path) -> Result<PathBuf, DocGenError> {
    let (doc, mut page) = new_document("Employment Offer")?;

    page.title("DATACRAFT KENYA LTD");
    page.text_line("Human Resources Department");
    page.spacer(10.0);

    page.text_line(&format!("Date: {}", today()));
    page.spacer(5.0);

    page.text_line("Mr. James Onyango");
    page.text_line("P.O. Box 12345");
    page.text_line("Nairobi, Kenya");
    page.spacer(10.0);

    page.heading("RE: OFFER OF EMPLOYMENT - SOFTWARE DEVELOPER");
    page.spacer(5.0);

    page.text_line("Dear Mr. Onyango,");
    page.spacer(3.0);

    page.paragraph(
        "We are pleased to offer you the position of Software Developer at Datacraft Kenya Ltd. \
         This offer is subject to the following terms and conditions:",
    );
    page.spacer(5.0);

    page.field("Position", "Software Developer");
    page.field("Department", "Engineering");
    page.field("Start Date", "1 March 2026");
    page.field("Gross Salary", "KES 250,000 per month");
    page.field("Benefits", "Medical cover, pension contribution");
    page.spacer(5.0);

    page.paragraph("Please sign and return a copy of this letter to confirm your acceptance.");
    page.spacer(10.0);

    page.text_line("Yours sincerely,");
    page.spacer(10.0);
    page.signature_line("Grace Muthoni");
    page.text_line("HR Manager");

    let path = output_dir.join(SAMPLE_DOCUMENTS[2]);
    save_document(doc, &path)?;
    Ok(path)
}

/// Sample policy document, relevant to all departments.
pub fn create_policy_document(output_dir: &Path) -> Result<PathBuf, DocGenError> {
    let (doc, mut page) = new_document("Data Protection Policy")?;

    page.title("DATA PROTECTION POLICY");
    page.bold_line("Datacraft Kenya Ltd");
    page.text_line(&format!("Effective Date: {}", today()));
    page.spacer(10.0);

    page.heading("1. PURPOSE");
    page.paragraph(
        "This policy establishes guidelines for the collection, use, and protection of \
         personal data in compliance with the Kenya Data Protection Act, 2019.",
    );
    page.spacer(5.0);

    page.heading("2. SCOPE");
    page.paragraph(
        "This policy applies to all employees, contractors, and third parties who handle \
         personal data on behalf of Datacraft Kenya Ltd.",
    );
    page.spacer(5.0);

    page.heading("3. DATA PROTECTION PRINCIPLES");
    page.text_line("Personal data shall be:");
    page.list_item("Processed lawfully, fairly, and transparently");
    page.list_item("Collected for specified, explicit purposes");
    page.list_item("Adequate, relevant, and limited to necessity");
    page.list_item("Accurate and kept up to date");
    page.list_item("Stored securely with appropriate measures");
    page.spacer(5.0);

    page.heading("4. RESPONSIBILITIES");
    page.paragraph(
        "The Data Protection Officer is responsible for ensuring compliance with this policy. \
         All employees must complete annual data protection training.",
    );
    page.spacer(10.0);

    page.bold_line("Approved by:");
    page.spacer(5.0);
    page.signature_line("Managing Director");

    let path = output_dir.join(SAMPLE_DOCUMENTS[3]);
    save_document(doc, &path)?;
    Ok(path)
}

/// Sample internal memo, relevant to all departments.
pub fn create_memo(output_dir: &Path) -> Result<PathBuf, DocGenError> {
    let (doc, mut page) = new_document("Internal Memorandum")?;

    page.title("INTERNAL MEMORANDUM");
    page.spacer(10.0);

    page.field("Date", &today());
    page.field("To", "All Staff");
    page.field("From", "IT Department");
    page.field("Subject", "Scheduled System Maintenance");
    page.spacer(10.0);

    page.paragraph(
        "Please be advised that scheduled maintenance will be performed on our document \
         management system on Saturday, 25 January 2026, from 6:00 AM to 12:00 PM EAT.",
    );
    page.spacer(5.0);

    page.text_line("During this time, the following services will be temporarily unavailable:");
    page.list_item("Document upload and download");
    page.list_item("Search functionality");
    page.list_item("Workflow processing");
    page.spacer(5.0);

    page.paragraph(
        "We apologize for any inconvenience and appreciate your understanding as we work \
         to improve system performance and reliability.",
    );
    page.spacer(10.0);

    page.text_line("For any questions, please contact the IT helpdesk.");

    let path = output_dir.join(SAMPLE_DOCUMENTS[4]);
    save_document(doc, &path)?;
    Ok(path)
}

// ============================================================
// Integration tests (filesystem, no external services)
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_all_five_documents() {
        let dir = tempfile::tempdir().unwrap();
        let paths = generate_all(dir.path()).unwrap();

        assert_eq!(paths.len(), SAMPLE_DOCUMENTS.len());
        for (path, expected) in paths.iter().zip(SAMPLE_DOCUMENTS) {
            assert_eq!(path.file_name().unwrap(), expected);
            let bytes = fs::read(path).unwrap();
            assert!(bytes.starts_with(b"%PDF"), "{expected} is not a PDF");
            // A one-page document with real content is comfortably past 1 KiB.
            assert!(bytes.len() > 1024, "{expected} is suspiciously small");
        }
    }

    #[test]
    fn output_directory_is_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("demo_documents");
        assert!(!nested.exists());

        generate_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn regenerating_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        generate_all(dir.path()).unwrap();
        let paths = generate_all(dir.path()).unwrap();
        assert_eq!(paths.len(), 5);
    }
}
