//! The four built-in flow definitions. Catalog data is static; prices
//! are whole rupees.

use crate::models::{FieldKind, FieldSpec, ServiceItem};

use super::{FlowDefinition, FlowKind, OperatingHours, StepKind, StepSpec};

pub fn definition(kind: FlowKind) -> FlowDefinition {
    match kind {
        FlowKind::Salon => salon(),
        FlowKind::Doctor => doctor(),
        FlowKind::Travel => travel(),
        FlowKind::Repair => repair(),
    }
}

fn salon() -> FlowDefinition {
    FlowDefinition {
        kind: FlowKind::Salon,
        business_name: "Glamour Studio".to_string(),
        whatsapp_number: "919876543210".to_string(),
        hours: Some(OperatingHours {
            start_hour: 9,
            end_hour: 20,
            interval_minutes: 30,
        }),
        services: vec![
            ServiceItem::new("s1", "Haircut & Styling", 45, 500)
                .with_icon("✂️")
                .with_description("Wash, cut & blow dry"),
            ServiceItem::new("s2", "Hair Coloring", 90, 1800)
                .with_icon("🎨")
                .with_description("Global color / highlights"),
            ServiceItem::new("s3", "Facial Treatment", 60, 1200)
                .with_icon("✨")
                .with_description("Deep cleansing + massage"),
            ServiceItem::new("s4", "Manicure", 30, 400)
                .with_icon("💅")
                .with_description("Shape, buff & polish"),
            ServiceItem::new("s5", "Pedicure", 45, 600)
                .with_icon("🦶")
                .with_description("Scrub, massage & polish"),
            ServiceItem::new("s6", "Bridal Package", 180, 8000)
                .with_icon("👰")
                .with_description("Full bridal makeup + hair"),
        ],
        steps: vec![
            StepSpec::new("service", "Services", StepKind::Services { multi: true }),
            StepSpec::new("datetime", "Date & Time", StepKind::Schedule),
            StepSpec::new(
                "details",
                "Your Info",
                StepKind::Details {
                    fields: vec![
                        FieldSpec::new("name", "Full Name", FieldKind::Text).required(),
                        FieldSpec::new("phone", "Mobile Number", FieldKind::Phone).required(),
                        FieldSpec::new("email", "Email", FieldKind::Email),
                        FieldSpec::new("notes", "Special requests", FieldKind::Text),
                    ],
                },
            ),
            StepSpec::new("confirm", "Confirm", StepKind::Review),
        ],
        service_label: "Services".to_string(),
        total_label: Some("Total".to_string()),
        select_message: "Please select at least one service".to_string(),
    }
}

fn doctor() -> FlowDefinition {
    FlowDefinition {
        kind: FlowKind::Doctor,
        business_name: "MediCare Clinic".to_string(),
        whatsapp_number: "919876543210".to_string(),
        hours: Some(OperatingHours {
            start_hour: 9,
            end_hour: 17,
            interval_minutes: 20,
        }),
        services: vec![
            ServiceItem::new("d1", "Dr. Priya Sharma", 20, 500)
                .with_icon("👩‍⚕️")
                .with_description("General Physician"),
            ServiceItem::new("d2", "Dr. Rahul Mehta", 20, 800)
                .with_icon("👨‍⚕️")
                .with_description("Dermatologist"),
            ServiceItem::new("d3", "Dr. Anjali Singh", 20, 700)
                .with_icon("👩‍⚕️")
                .with_description("Gynecologist"),
            ServiceItem::new("d4", "Dr. Vikram Patel", 20, 900)
                .with_icon("👨‍⚕️")
                .with_description("Orthopedic"),
        ],
        steps: vec![
            StepSpec::new("doctor", "Doctor", StepKind::Services { multi: false }),
            StepSpec::new("datetime", "Schedule", StepKind::Schedule),
            StepSpec::new(
                "patient",
                "Patient",
                StepKind::Details {
                    fields: vec![
                        FieldSpec::new("name", "Patient Name", FieldKind::Text).required(),
                        FieldSpec::new("age", "Age", FieldKind::Age),
                        FieldSpec::new("phone", "Phone", FieldKind::Phone).required(),
                        FieldSpec::new("symptoms", "Symptoms", FieldKind::Text),
                    ],
                },
            ),
            StepSpec::new("confirm", "Confirm", StepKind::Review),
        ],
        service_label: "Doctor".to_string(),
        total_label: Some("Consultation Fee".to_string()),
        select_message: "Please select a doctor".to_string(),
    }
}

fn travel() -> FlowDefinition {
    FlowDefinition {
        kind: FlowKind::Travel,
        business_name: "Traveleezz".to_string(),
        whatsapp_number: "917208788981".to_string(),
        // consultations are arranged over WhatsApp, no slot picking
        hours: None,
        services: vec![
            ServiceItem::new("t1", "Goa", 0, 8999)
                .with_icon("🏖️")
                .with_description("3-5 nights"),
            ServiceItem::new("t2", "Kerala", 0, 12999)
                .with_icon("🌴")
                .with_description("4-6 nights"),
            ServiceItem::new("t3", "Rajasthan", 0, 15999)
                .with_icon("🏰")
                .with_description("5-7 nights"),
            ServiceItem::new("t4", "Manali", 0, 11999)
                .with_icon("🏔️")
                .with_description("4-6 nights"),
            ServiceItem::new("t5", "Andaman", 0, 24999)
                .with_icon("🌊")
                .with_description("5-7 nights"),
            ServiceItem::new("t6", "Bali", 0, 35999)
                .with_icon("🌺")
                .with_description("5-7 nights"),
        ],
        steps: vec![
            StepSpec::new("destination", "Destination", StepKind::Services { multi: false }),
            StepSpec::new(
                "trip",
                "Trip Details",
                StepKind::Details {
                    fields: vec![
                        FieldSpec::new("travelers", "Travelers", FieldKind::Count).required(),
                        FieldSpec::new("nights", "Nights", FieldKind::Count).required(),
                        FieldSpec::new("package", "Package", FieldKind::Text).required(),
                        FieldSpec::new("date", "Preferred Date", FieldKind::Text),
                        FieldSpec::new("budget", "Budget", FieldKind::Text),
                    ],
                },
            ),
            StepSpec::new(
                "contact",
                "Contact",
                StepKind::Details {
                    fields: vec![
                        FieldSpec::new("name", "Name", FieldKind::Text).required(),
                        FieldSpec::new("phone", "Phone", FieldKind::Phone).required(),
                        FieldSpec::new("email", "Email", FieldKind::Email),
                    ],
                },
            ),
            StepSpec::new("confirm", "Confirm", StepKind::Review),
        ],
        service_label: "Destination".to_string(),
        total_label: None,
        select_message: "Please select a destination".to_string(),
    }
}

fn repair() -> FlowDefinition {
    FlowDefinition {
        kind: FlowKind::Repair,
        business_name: "FixIt Express".to_string(),
        whatsapp_number: "919876543210".to_string(),
        hours: Some(OperatingHours {
            start_hour: 8,
            end_hour: 20,
            interval_minutes: 60,
        }),
        services: vec![
            ServiceItem::new("ac", "AC Repair / Service", 60, 499).with_icon("❄️"),
            ServiceItem::new("mobile", "Mobile Repair", 45, 299).with_icon("📱"),
            ServiceItem::new("tv", "TV Repair", 90, 399).with_icon("📺"),
            ServiceItem::new("washing", "Washing Machine", 60, 449).with_icon("🫧"),
            ServiceItem::new("fridge", "Refrigerator Repair", 90, 549).with_icon("🧊"),
            ServiceItem::new("plumber", "Plumbing Work", 60, 349).with_icon("🔧"),
        ],
        steps: vec![
            StepSpec::new("service", "Service", StepKind::Services { multi: false }),
            StepSpec::new("schedule", "Schedule", StepKind::Schedule),
            StepSpec::new(
                "address",
                "Address",
                StepKind::Details {
                    fields: vec![
                        FieldSpec::new("name", "Name", FieldKind::Text).required(),
                        FieldSpec::new("phone", "Phone", FieldKind::Phone).required(),
                        FieldSpec::new("address", "Address", FieldKind::Text).required(),
                        FieldSpec::new("landmark", "Landmark", FieldKind::Text),
                        FieldSpec::new("issue", "Issue", FieldKind::Text),
                    ],
                },
            ),
            StepSpec::new("confirm", "Confirm", StepKind::Review),
        ],
        service_label: "Service".to_string(),
        total_label: Some("Visit Charge".to_string()),
        select_message: "Please select a service".to_string(),
    }
}
