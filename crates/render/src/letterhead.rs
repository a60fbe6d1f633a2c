/// Issuer details printed at the top and bottom of every invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letterhead {
    pub company_name: String,
    pub address_lines: Vec<String>,
    pub pan: String,
    pub gstin: String,
    pub email: String,
    pub phone: String,
    /// Printed under a party's name when the party has no address of its own.
    pub default_region: String,
    pub terms: Vec<String>,
}

impl Letterhead {
    /// Lines printed under the company name.
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = self.address_lines.clone();
        lines.push(format!("PAN: {}", self.pan));
        lines.push(format!("GST: {}", self.gstin));
        lines.push(format!("Email: {}", self.email));
        lines.push(format!("Phone: {}", self.phone));
        lines
    }
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            company_name: "VIDWAT ASSOCIATES".to_string(),
            address_lines: vec![
                "#33, Arvind Nagar".to_string(),
                "Near Veer Savarkar Circle".to_string(),
                "Vijayapur 586101, Karnataka, India".to_string(),
            ],
            pan: "AAZFV2824J".to_string(),
            gstin: "29AAZFV2824J1ZB".to_string(),
            email: "vidwatassociates@gmail.com".to_string(),
            phone: "7892787054".to_string(),
            default_region: "Karnataka,".to_string(),
            terms: vec![
                "1. All payments should be made electronically in the name of Vidwat Associates."
                    .to_string(),
                "2. All disputes shall be subjected to jurisdiction of Vijayapur.".to_string(),
                "3. This invoice is subjected to the terms and conditions mentioned in the agreement or work order."
                    .to_string(),
            ],
        }
    }
}
