use crate::domain::analysis::value_objects::Coordinates;

/// Fixed instruction templates for the four analysis operations. The model
/// answers in Arabic; structured operations are additionally constrained by
/// the schemas in [`super::schema`] and must use the English enum values
/// `halal` / `haram` / `suspect` for every status field.

pub fn product_analysis_prompt() -> String {
    "حلل صورة المنتج هذه. حدد ما إذا كان المنتج \"حلال\" أو \"حرام\" أو \"مشبوه\".\n\
     قدم اسم المنتج، قائمة بالمكونات الرئيسية وحالة كل منها، وشرحاً مفصلاً للسبب.\n\
     إذا أمكن، قدم معلومات صحية موجزة وأي دليل شرعي ذي صلة.\n\
     استخدم القيم \"halal\" أو \"haram\" أو \"suspect\" في حقول الحالة.\n\
     أجب بصيغة JSON فقط."
        .to_string()
}

pub fn menu_analysis_prompt() -> String {
    "حلل صورة قائمة الطعام هذه. لكل طبق، حدد ما إذا كان \"حلال\" أو \"حرام\" أو \"مشبوه\".\n\
     قدم اسم الطبق، والحالة، وأي ملاحظات مهمة (مثل المكونات المشبوهة).\n\
     استخدم القيم \"halal\" أو \"haram\" أو \"suspect\" في حقل الحالة.\n\
     أجب بصيغة JSON فقط، على شكل مصفوفة من الكائنات."
        .to_string()
}

pub fn ingredient_info_prompt(query: &str) -> String {
    format!(
        "قدم شرحاً مفصلاً عن المكون التالي: \"{query}\".\n\
         وضح مصدره (حيواني، نباتي، صناعي)، وحكمه الشرعي (حلال، حرام، مشبوه) مع ذكر السبب.\n\
         استخدم تنسيق ماركداون بسيط للإجابة."
    )
}

pub fn places_prompt(query: &str, location: Coordinates) -> String {
    format!(
        "ابحث عن أماكن قريبة بناءً على الاستعلام التالي: \"{query}\".\n\
         موقعي الحالي هو خط العرض {lat} وخط الطول {lon}.\n\
         أجب بصيغة JSON فقط، على شكل مصفوفة من الكائنات. يجب أن يحتوي كل كائن على الحقول التالية:\n\
         - name: string (اسم المكان)\n\
         - category: string (فئة المكان، مثل \"مطعم\" أو \"مسجد\")\n\
         - rating: number (التقييم من 5، إن وجد)\n\
         - distance: string (المسافة من موقعي، مثل \"500 متر\" أو \"1.2 كم\")\n\
         - mapsLink: string (رابط خرائط جوجل للمكان)",
        lat = location.latitude,
        lon = location.longitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_prompt_interpolates_query_and_location() {
        let location = Coordinates::new(24.7136, 46.6753).unwrap();
        let prompt = places_prompt("مطاعم حلال", location);
        assert!(prompt.contains("مطاعم حلال"));
        assert!(prompt.contains("24.7136"));
        assert!(prompt.contains("46.6753"));
    }

    #[test]
    fn ingredient_prompt_embeds_query() {
        assert!(ingredient_info_prompt("E471").contains("\"E471\""));
    }
}
