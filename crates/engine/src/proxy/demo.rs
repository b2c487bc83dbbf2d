use std::collections::HashMap;
use citykey_shared::Language;

/// Topic keywords that select the utility reply.
pub const ELECTRICITY_KEYWORDS: &[&str] = &["electricity", "dewa", "addc", "power"];

const EN_DEFAULT: &str = "Great question! Here's what you need to know about living in Abu Dhabi:

**Step-by-step guide:**
1. First, make sure you have your Emirates ID ready
2. Visit the relevant government portal (TAMM app is your best friend!)
3. Submit the required documents

**Documents typically needed:**
• Emirates ID (original + copy)
• Passport with valid visa
• Proof of address (utility bill or tenancy contract)

**Where to go:**
• TAMM App (download from App Store/Play Store)
• TAMM Service Centers across Abu Dhabi
• Online at tamm.abudhabi

**Fees:** Vary by service, typically AED 50-200

Is there anything specific I can help you with? 😊";

const EN_ELECTRICITY: &str = "# Setting Up DEWA/ADDC Electricity

**For Abu Dhabi (ADDC):**

**Step 1: Gather Documents**
• Emirates ID (original)
• Tenancy contract (Tawtheeq registered)
• Passport copy with valid visa

**Step 2: Apply Online or In-Person**
• Online: Visit addc.ae
• App: Download ADDC app
• In-person: Any ADDC customer service center

**Step 3: Pay Fees**
• Connection fee: AED 100
• Security deposit: AED 2,000 (apartment) or AED 4,000 (villa)

**Processing time:** 1-3 business days

**Pro tip:** Make sure your Tawtheeq (tenancy registration) is complete before applying!

Need help with anything else? 🔌";

const AR_DEFAULT: &str = "سؤال رائع! إليك ما تحتاج معرفته عن الحياة في أبوظبي:

**دليل خطوة بخطوة:**
1. أولاً، تأكد من أن هويتك الإماراتية جاهزة
2. قم بزيارة البوابة الحكومية المعنية (تطبيق تم هو صديقك الأفضل!)
3. قدم المستندات المطلوبة

**المستندات المطلوبة عادة:**
• الهوية الإماراتية (الأصل + نسخة)
• جواز السفر مع تأشيرة صالحة
• إثبات العنوان (فاتورة خدمات أو عقد إيجار)

**أين تذهب:**
• تطبيق تم (حمله من App Store/Play Store)
• مراكز خدمة تم في أنحاء أبوظبي
• عبر الإنترنت على tamm.abudhabi

**الرسوم:** تختلف حسب الخدمة، عادة 50-200 درهم

هل هناك شيء محدد يمكنني مساعدتك به؟ 😊";

const HI_DEFAULT: &str = "बढ़िया सवाल! अबू धाबी में रहने के बारे में यह जानना ज़रूरी है:

**स्टेप-बाय-स्टेप गाइड:**
1. सबसे पहले, अपनी Emirates ID तैयार रखें
2. सही सरकारी पोर्टल पर जाएं (TAMM ऐप आपका सबसे अच्छा दोस्त है!)
3. ज़रूरी दस्तावेज़ जमा करें

**आमतौर पर ज़रूरी दस्तावेज़:**
• Emirates ID (ओरिजिनल + कॉपी)
• वैध वीज़ा वाला पासपोर्ट
• पते का प्रमाण (बिजली का बिल या किराया अनुबंध)

**कहाँ जाएं:**
• TAMM ऐप (App Store/Play Store से डाउनलोड करें)
• अबू धाबी में TAMM सेवा केंद्र
• ऑनलाइन: tamm.abudhabi

**फीस:** सेवा के अनुसार अलग, आमतौर पर AED 50-200

क्या कोई खास चीज़ है जिसमें मैं आपकी मदद कर सकता हूँ? 😊";

#[derive(Debug, Clone)]
pub struct DemoSet {
    pub default: String,
    pub electricity: Option<String>,
}

/// Canned replies used when the live model is unavailable.
#[derive(Debug, Clone)]
pub struct DemoResponses {
    sets: HashMap<Language, DemoSet>,
}

impl Default for DemoResponses {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DemoResponses {
    pub fn builtin() -> Self {
        let mut sets = HashMap::new();
        sets.insert(Language::En, DemoSet {
            default: EN_DEFAULT.to_string(),
            electricity: Some(EN_ELECTRICITY.to_string()),
        });
        sets.insert(Language::Ar, DemoSet {
            default: AR_DEFAULT.to_string(),
            electricity: None,
        });
        sets.insert(Language::Hi, DemoSet {
            default: HI_DEFAULT.to_string(),
            electricity: None,
        });
        Self { sets }
    }

    /// Builds a table from explicit sets. The base language must be present.
    pub fn new(sets: HashMap<Language, DemoSet>) -> anyhow::Result<Self> {
        if !sets.contains_key(&Language::BASE) {
            anyhow::bail!("Demo responses need an entry for '{}'", Language::BASE);
        }
        Ok(Self { sets })
    }

    pub fn select(&self, message: &str, language: Language) -> &str {
        let set = self.sets
            .get(&language)
            .or_else(|| self.sets.get(&Language::BASE));

        let Some(set) = set else {
            return "";
        };

        if mentions_electricity(message) {
            if let Some(reply) = &set.electricity {
                return reply;
            }
        }

        &set.default
    }
}

pub fn mentions_electricity(message: &str) -> bool {
    let lowered = message.to_lowercase();
    ELECTRICITY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
