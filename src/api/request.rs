/// Wire shapes for the HTTP surface. Cards arrive as loose notation
/// strings ("As Kd", "9h5sJc"); normalization happens in the API layer,
/// not in the simulator.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct EquityRequest {
    pub hand: String,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub opponents: Option<usize>,
    #[serde(default)]
    pub trials: Option<usize>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AdviseRequest {
    pub hand: String,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub opponents: Option<usize>,
    #[serde(default)]
    pub pot: Option<f64>,
    #[serde(default)]
    pub facing: Option<String>,
}
