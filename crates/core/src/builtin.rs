//! Built-in course: securing a home router and Wi-Fi network.
//!
//! Lesson and completion bodies are Markdown. Bracketed numbers refer to the
//! entries in the completion page references.

use crate::catalog::{CatalogError, ContentCatalog};
use crate::model::{AnswerOption, LessonSection, PageDescriptor, Question};

pub const HOME_NETWORK_TITLE: &str = "Secure Your SmartHome";

fn opt(id: &str, text: &str, is_correct: bool) -> AnswerOption {
    AnswerOption::new(id, text, is_correct)
}

fn lesson(title: &str, sections: Vec<LessonSection>) -> PageDescriptor {
    PageDescriptor::Lesson {
        title: title.to_string(),
        sections,
    }
}

fn quiz(title: &str, questions: Vec<Question>) -> PageDescriptor {
    PageDescriptor::Quiz {
        title: title.to_string(),
        questions,
    }
}

/// Build the home network security walkthrough.
///
/// # Errors
///
/// Returns `CatalogError` if the authored content violates a question or
/// catalog invariant.
pub fn home_network_security() -> Result<ContentCatalog, CatalogError> {
    let pages = vec![
        PageDescriptor::Welcome {
            title: "Welcome to Secure Your SmartHome".to_string(),
            body: "\
Home networks are a central part of modern life, and protecting them is essential.

This app will guide you through the key steps needed to secure your router, manage your Wi-Fi settings, and reduce common security risks.

You'll learn best practices and then apply them through short decision-based exercises.

Tap Start to begin."
                .to_string(),
        },
        PageDescriptor::Introduction {
            body: "\
Your router controls how all of your devices connect to the internet.

Misconfigured settings or outdated security options can make your network vulnerable to unauthorized access.

This walkthrough will explain important security principles in simple terms. After each lesson, you'll answer a few questions or make decisions based on what you've learned [3]. If you select an unsafe option, you can review the material and try again.

Let's begin with securing your router's basic settings."
                .to_string(),
        },
        // ── Credentials & SSID ──
        lesson(
            "Router Credentials & SSID",
            vec![
                LessonSection::new(
                    "1. Changing the Router Login Username & Password",
                    "\
Most routers come with a default administrator username and password. These default credentials are easy for attackers to guess because they are published online for nearly every router model [1].

Changing the admin login protects your router's configuration page from unauthorized access. Your new password should:

- Be at least 12 characters long
- Avoid personal information and common words
- Not be reused from other accounts",
                ),
                LessonSection::new(
                    "2. Changing the Default SSID",
                    "\
The SSID is the name of your Wi-Fi network. Leaving the default SSID or including personal details can expose unnecessary information [1].

Avoid:

- Your name, address, apartment number
- The router brand or model (could allow others to know vulnerabilities it has)
- Anything that identifies you or your family

A neutral name keeps your network private and avoids giving attackers useful hints.",
                ),
            ],
        ),
        quiz(
            "Test: Credentials & SSID",
            vec![
                Question::single(
                    "1. Choose a Strong Admin Password\n\nSelect the option that best follows strong password practices. Avoid short, predictable, or reused passwords.",
                    vec![
                        opt("A", "Sunset123!", false),
                        opt("B", "GarrettHomeWiFi2025", false),
                        opt("C", "river-train-laptop-orange", true),
                        opt("D", "P@ssword!", false),
                    ],
                )?,
                Question::single(
                    "2. Pick an Acceptable SSID\n\nChoose the network name that does not reveal personal details or the router model.",
                    vec![
                        opt("A", "SmithFamily_Unit12", false),
                        opt("B", "NETGEAR_AX6000", false),
                        opt("C", "HomeNetwork_5G", true),
                        opt("D", "1234 Oak Street WiFi", false),
                    ],
                )?,
            ],
        ),
        // ── Passphrase & encryption ──
        lesson(
            "Wi-Fi Passphrase & Encryption",
            vec![
                LessonSection::new(
                    "1. Wi-Fi Passphrase",
                    "\
Your Wi-Fi password controls who can join your network. A weak password allows intruders onto your home Wi-Fi [1].

The Cybersecurity and Infrastructure Security Agency (CISA) recommends creating a passphrase using 5–7 unrelated words, totaling at least 16 characters [1].

This makes the password long, memorable, and hard to guess.

Do not reuse your Wi-Fi password for other logins.",
                ),
                LessonSection::new(
                    "2. Wi-Fi Encryption",
                    "\
Your router offers several encryption types. Only two provide strong protection today [1][4]:

- **WPA3 Personal** (preferred)
- **WPA2 AES/PSK** (acceptable if WPA3 isn't available)

Avoid older standards like WEP or WPA/TKIP. These can be cracked quickly with publicly available tools.",
                ),
            ],
        ),
        quiz(
            "Test: Wi-Fi Settings",
            vec![
                Question::single(
                    "1. Choose a Strong Wi-Fi Password\n\nSelect the passphrase that uses long, unrelated words and does not reuse personal information.",
                    vec![
                        opt("A", "ISUcyberSecurity2024!", false),
                        opt("B", "BeachSunset!55", false),
                        opt("C", "coffee-lawn-bridge-signal-cloud", true),
                        opt("D", "GarrettsWiFi123", false),
                    ],
                )?,
                Question::single(
                    "2. Choose a Good Encryption Standard\n\nSelect WPA3 Personal, or WPA2 AES/PSK if WPA3 is not supported.",
                    vec![
                        opt("A", "WEP", false),
                        opt("B", "WPA2-TKIP", false),
                        opt("C", "WPA3 Personal", true),
                        opt("D", "Open (No Password)", false),
                    ],
                )?,
            ],
        ),
        // ── Remote access, WPS, UPnP ──
        lesson(
            "Remote Access, WPS, and UPnP",
            vec![
                LessonSection::new(
                    "1. Disable Remote Management",
                    "\
Remote management allows the router to be accessed from outside your home network [1].

Unless you specifically need this feature, keeping it enabled increases your risk of unauthorized access.

It is best to disable remote management.",
                ),
                LessonSection::new(
                    "2. Disable WPS",
                    "\
Wi-Fi Protected Setup (WPS) was designed to simplify device connection. Unfortunately, the PIN-based method can be brute-forced easily. This makes WPS a security risk on most home networks [1].

Disabling WPS is recommended.",
                ),
                LessonSection::new(
                    "3. Disable UPnP",
                    "\
Universal Plug and Play (UPnP) lets devices automatically open ports on your router. While convenient, it can also allow malware or unwanted applications to open ports without your knowledge [1].

For safety, UPnP should be disabled unless you have a specific need for it.",
                ),
            ],
        ),
        quiz(
            "Test: Disable Unsafe Features",
            vec![Question::multiple(
                "Choose the settings that should be turned off:",
                vec![
                    opt("A", "Remote Management", true),
                    opt("B", "WPS (Wi-Fi Protected Setup)", true),
                    opt("C", "UPnP (Universal Plug and Play)", true),
                    opt("D", "WPA3 Personal", false),
                    opt("E", "Guest Network", false),
                    opt("F", "Firewall / SPI Firewall", false),
                    opt("G", "DHCP Server", false),
                    opt("H", "Wi-Fi Encryption (WPA2/WPA3)", false),
                ],
            )?],
        ),
        // ── Physical security & guest network ──
        lesson(
            "Physical Security & Guest Network Use",
            vec![
                LessonSection::new(
                    "1. Store the Router in a Secure, Private Location",
                    "\
A router should be placed somewhere that isn't easily accessible to guests or the public [1].

Someone with physical access could reset it, view the default password label, or connect unauthorized devices.

Keep it in a safe, indoor location where only household members can reach it.",
                ),
                LessonSection::new(
                    "2. Use a Guest Network for IoT and Visitors",
                    "\
Most routers support creating a separate guest network [1].

Use this network for:

- Smart home devices (Internet of Things)
- TVs
- Smart speakers
- Cameras
- Visitors' devices

Guest networks isolate low-trust devices and reduce the chance of an intruder accessing personal computers or smartphones.",
                ),
            ],
        ),
        quiz(
            "Test: Physical & Network Separation",
            vec![
                Question::multiple(
                    "1. Choose Which Items Go on the Guest Network\n\nSort devices into either the main network (trusted/personal) or the guest network (IoT and visitors). Select all that should go on the GUEST network:",
                    vec![
                        opt("A", "Smart Speakers", true),
                        opt("B", "Tablets", false),
                        opt("C", "Personal laptops", false),
                        opt("D", "A guest's laptop", true),
                        opt("E", "Work/school computers", false),
                        opt("F", "Security Cameras", true),
                        opt("G", "Personal smartphones", false),
                        opt("H", "Smart TVs", true),
                    ],
                )?,
                Question::single(
                    "2. Choose the Best Place to Keep a Router\n\nSelect the most secure indoor location with limited public access.",
                    vec![
                        opt("A", "On a windowsill in the living room, near the front door.", false),
                        opt("B", "On a high shelf in a central office room inside the home.", true),
                        opt("C", "On the balcony or patio for better signal outside.", false),
                        opt(
                            "D",
                            "In an unlocked hallway cabinet accessible to anyone in the building.",
                            false,
                        ),
                    ],
                )?,
            ],
        ),
        // ── Maintenance ──
        lesson(
            "Maintenance, Firmware, Firewall",
            vec![
                LessonSection::new(
                    "1. Schedule Weekly Reboots",
                    "\
Some routers perform better when rebooted periodically [2].

If your router supports scheduled reboots, selecting a weekly time can improve stability.",
                ),
                LessonSection::new(
                    "2. Update Firmware",
                    "\
Router firmware updates include important security patches and performance improvements. Not updating your router leaves you exposed to known vulnerabilities [1].

Always apply firmware updates when they are available.",
                ),
                LessonSection::new(
                    "3. Enable Firewall Options",
                    "\
Most routers include firewall protections such as [2]:

- Stateful Packet Inspection (SPI)
- Blocking inbound traffic
- Preventing unauthorized connections

These features help protect your home from external attacks and should remain enabled.",
                ),
            ],
        ),
        quiz(
            "Test: Maintenance Settings",
            vec![Question::multiple(
                "Choose the options that improve network security:",
                vec![
                    opt("A", "Enabling firewall protections", true),
                    opt("B", "Leaving WPS enabled", false),
                    opt("C", "Applying the firmware update", true),
                    opt("D", "Using an easily guessable Wi-Fi password", false),
                    opt("E", "A consistent weekly reboot schedule", true),
                    opt("F", "Disabling WPA3 encryption", false),
                    opt("G", "Leaving UPnP enabled", false),
                    opt("H", "Using the default router password", false),
                ],
            )?],
        ),
        // ── Choosing a router ──
        lesson(
            "Choosing a Secure Router",
            vec![LessonSection::new(
                "When shopping for a new router, look for:",
                "\
1. **Wi-Fi CERTIFIED Logo.** This indicates the device meets modern security and performance standards [4].
2. **WPA3 Support.** WPA3 is the current best-practice wireless security protocol [4].
3. **Multiple SSIDs.** A good router allows at least two networks: a primary network and a guest network.
4. **Wi-Fi Standard.** Look for Wi-Fi 6 or Wi-Fi 6E for up-to-date performance and security support.

A router with these features will provide a safer and more reliable network experience.",
            )],
        ),
        quiz(
            "Test: Choose a Good Router",
            vec![Question::multiple(
                "From the options shown, select the routers that include:\n• WPA3\n• Multiple SSIDs\n• Wi-Fi CERTIFIED\n• A modern Wi-Fi version",
                vec![
                    opt(
                        "A",
                        "NetWave AX6000\nWPA3 support\nMultiple SSIDs\nWi-Fi CERTIFIED\nWi-Fi 6",
                        true,
                    ),
                    opt(
                        "B",
                        "SpeedLink 3000\nWPA2 only\nSingle SSID\nNot Wi-Fi CERTIFIED\nWi-Fi 5",
                        false,
                    ),
                    opt(
                        "C",
                        "HomeSecure X1\nWPA3 support\nMultiple SSIDs\nWi-Fi CERTIFIED\nWi-Fi 6E",
                        true,
                    ),
                    opt(
                        "D",
                        "RouterMax Basic\nWEP/WPA only\nSingle SSID\nNot Wi-Fi CERTIFIED\nWi-Fi 4",
                        false,
                    ),
                ],
            )?],
        ),
        PageDescriptor::Completion {
            title: "Thank You for Learning!".to_string(),
            body: "\
Congratulations on completing this home network security walkthrough!

You've learned essential practices for securing your router and protecting your home network. By applying these principles, you're taking important steps to safeguard your devices and personal information.

Remember:

- Keep your router firmware updated
- Use strong, unique passwords
- Regularly review your security settings
- Separate trusted devices from IoT devices

Stay secure!"
                .to_string(),
            references: vec![
                "[1] \"Module 5: Securing Your Home Wi-Fi | CISA,\" Cybersecurity and Infrastructure Security Agency CISA, 2025. https://www.cisa.gov/audiences/high-risk-communities/projectupskill/module5 (accessed Oct. 13, 2025).".to_string(),
                "[2] National Security Agency, \"Best Practices for Securing Your Home Network,\" Feb. 2023. Available: https://media.defense.gov/2023/Feb/22/2003165170/-1/-1/0/CSI_BEST_PRACTICES_FOR_SECURING_YOUR_HOME_NETWORK.PDF".to_string(),
                "[3] E. office, \"Making technology work for adult learners: our 6 key research findings - European Association for the Education of Adults,\" European Association for the Education of Adults, Sep. 04, 2025. https://eaea.org/2025/09/04/making-technology-work-for-adult-learners-our-6-key-research-findings/ (accessed Oct. 13, 2025).".to_string(),
                "[4] Wi-Fi Alliance, \"WPA3 Deployment Options Highlights,\" Nov. 2024. Available: https://www.wi-fi.org/system/files/WPA3_Deployment_Options_Highlights_20241125.pdf".to_string(),
            ],
        },
    ];

    ContentCatalog::new(HOME_NETWORK_TITLE, pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageIndex, PageKind};

    #[test]
    fn builtin_catalog_validates() {
        let catalog = home_network_security().unwrap();
        assert_eq!(catalog.title(), HOME_NETWORK_TITLE);
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.quiz_count(), 6);
    }

    #[test]
    fn builtin_catalog_follows_authoring_order() {
        let catalog = home_network_security().unwrap();
        let kinds: Vec<_> = catalog.pages().iter().map(PageDescriptor::kind).collect();

        assert_eq!(kinds[0], PageKind::Welcome);
        assert_eq!(kinds[1], PageKind::Introduction);
        assert_eq!(kinds.last(), Some(&PageKind::Completion));
        for (idx, kind) in kinds.iter().enumerate() {
            if *kind == PageKind::Quiz {
                assert_eq!(kinds[idx - 1], PageKind::Lesson, "quiz at {idx}");
            }
        }
    }

    #[test]
    fn completion_lists_four_references() {
        let catalog = home_network_security().unwrap();
        let PageDescriptor::Completion { references, .. } =
            catalog.page(catalog.last_index()).unwrap()
        else {
            panic!("last page is not completion");
        };
        assert_eq!(references.len(), 4);
        assert!(references[0].starts_with("[1]"));
    }

    #[test]
    fn first_quiz_answer_key() {
        let catalog = home_network_security().unwrap();
        let questions = catalog.page(PageIndex::new(3)).unwrap().questions().unwrap();
        let correct: Vec<_> = crate::evaluator::correct_option_ids(&questions[0])
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect();
        assert_eq!(correct, vec!["C".to_string()]);
    }
}
