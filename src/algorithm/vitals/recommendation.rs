//! Fixed advice texts for out-of-range vitals

use crate::algorithm::vitals::status::VitalStatus;
use crate::models::metric::Metric;

/// Advice shown when no specific recommendation exists
pub const GENERAL_ADVICE: &str = "Maintain healthy lifestyle habits and regular check-ups.";

/// Recommendation text for a metric in the given status
#[must_use]
pub const fn recommendation(metric: Metric, status: VitalStatus) -> &'static str {
    match (metric, status) {
        (Metric::BpSystolic, VitalStatus::High) => {
            "Your blood pressure is elevated. Consider reducing salt intake, exercising regularly, and managing stress. Consult a doctor if it persists."
        }
        (Metric::BpSystolic, VitalStatus::Low) => {
            "Your blood pressure is low. Stay hydrated, avoid sudden position changes, and eat regular meals. Consult a doctor if you feel dizzy."
        }
        (Metric::BpDiastolic, VitalStatus::High) => {
            "Your diastolic pressure is high. Monitor it regularly and consult a healthcare provider for proper management."
        }
        (Metric::BpDiastolic, VitalStatus::Low) => {
            "Your diastolic pressure is low. Ensure adequate hydration and consult a doctor if symptoms occur."
        }
        (Metric::Sugar, VitalStatus::High) => {
            "Your blood sugar is elevated. Limit sugary foods, increase physical activity, and monitor regularly. Consult a doctor for diabetes screening."
        }
        (Metric::Sugar, VitalStatus::Low) => {
            "Your blood sugar is low. Eat regular meals with complex carbohydrates. Keep quick sugar sources handy if you're diabetic."
        }
        (Metric::Pulse, VitalStatus::High) => {
            "Your pulse rate is elevated. Rest adequately, manage stress, and avoid excessive caffeine. Consult a doctor if it continues."
        }
        (Metric::Pulse, VitalStatus::Low) => {
            "Your pulse rate is low. If you're not an athlete and feel dizzy or weak, consult a healthcare provider."
        }
        _ => GENERAL_ADVICE,
    }
}
