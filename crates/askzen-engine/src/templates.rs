//! Canned Markdown answers served by the local backend.

pub const ALGEBRA_BASICS: &str = r#"# 📚 **Algebra: Working With Unknowns**

## Core Concepts

### 🔢 Variables
- **x, y, z** stand for unknown values
- **Constants** are fixed values such as 5, 10 or π

### ⚖️ Equations
- **Linear:** ax + b = c
- **Quadratic:** ax² + bx + c = 0
- **Systems:** several equations solved together

## 🎯 Problem Solving Steps
1. **Read** the problem carefully
2. **Identify** the unknown you need
3. **Set up** an equation
4. **Solve** it one step at a time
5. **Check** the answer by substituting it back

## 💡 Worked Example
**Problem:** 2x + 5 = 13
- 2x = 13 - 5 = 8
- x = 8 ÷ 2 = 4

**Answer:** x = 4

## 📈 Where Algebra Shows Up
- **Business:** profit and loss
- **Engineering:** design formulas
- **Everyday life:** discounts, loan repayments"#;

pub const QUADRATIC_FORMULA: &str = r#"# 🧮 **Algebra: The Quadratic Formula**

Every quadratic equation **ax² + bx + c = 0** (with a ≠ 0) is solved by

**x = (-b ± √(b² - 4ac)) / 2a**

## 🔍 The Discriminant
The value **D = b² - 4ac** tells you what kind of roots to expect:
- **D > 0:** two distinct real roots
- **D = 0:** one repeated real root
- **D < 0:** two complex roots

## 💡 Worked Example
**Problem:** x² - 5x + 6 = 0
- a = 1, b = -5, c = 6
- D = 25 - 24 = 1
- x = (5 ± 1) / 2

**Answer:** x = 3 or x = 2

## 🔁 Other Routes to the Same Roots
- **Factoring:** x² - 5x + 6 = (x - 2)(x - 3)
- **Completing the square:** x² + 6x + 9 = (x + 3)²"#;

pub const GEOMETRY_FUNDAMENTALS: &str = r#"# 📐 **Geometry: Shape and Space**

## 🔺 Basic Shapes

### Triangle
- **Area = ½ × base × height**
- **Perimeter = a + b + c**

### Rectangle
- **Area = length × width**
- **Perimeter = 2(l + w)**

### Circle
- **Area = πr²**
- **Circumference = 2πr**

## 🎯 Pythagoras' Theorem
In a right triangle, **a² + b² = c²**.

Sides of 3, 4 and 5 cm: 3² + 4² = 9 + 16 = 25 = 5², so the triangle is right-angled.

## 🏗️ Applications
- **Construction:** measuring plots and rooms
- **Navigation:** straight-line distances
- **Sport:** field dimensions"#;

pub const PHYSICS_BASICS: &str = r#"# ⚛️ **Physics: The Rules of Nature**

## ⚡ Fundamental Forces
- **Gravity:** F = mg, with g ≈ 9.8 m/s² on Earth
- **Electromagnetism:** current, voltage, magnetism, light

## 🚗 Newton's Laws
1. **Inertia:** an object keeps its state of motion unless a force acts on it
2. **F = ma:** force equals mass times acceleration
3. **Action and reaction** are equal and opposite

## 💡 Energy
- **Kinetic energy = ½mv²**
- **Potential energy = mgh**
- Energy is never created or destroyed, only transformed

## 🌊 Waves
- **Speed of sound:** about 343 m/s in air
- **Speed of light:** 3 × 10⁸ m/s
- **Frequency × wavelength = speed**"#;

pub const CHEMISTRY_BASICS: &str = r#"# 🧪 **Chemistry: Matter and Change**

## ⚛️ Atomic Structure
- **Protons** (positive) and **neutrons** (neutral) sit in the nucleus
- **Electrons** (negative) occupy shells around it
- The **atomic number** is the proton count

## 🔗 Chemical Bonds
- **Ionic:** electrons transferred (NaCl)
- **Covalent:** electrons shared (H₂O)
- **Metallic:** a sea of shared electrons

## 🔥 Reactions
- **Combination:** A + B → AB
- **Decomposition:** AB → A + B
- **Combustion:** fuel + O₂ → CO₂ + H₂O

## 🧫 Acids and Bases
- **pH < 7:** acidic, **pH = 7:** neutral, **pH > 7:** basic"#;

pub const BIOLOGY_BASICS: &str = r#"# 🧬 **Biology: The Study of Life**

## 🔬 Cells
- The **cell** is the basic unit of life
- **Nucleus** holds DNA, **mitochondria** release energy

## 🌱 Photosynthesis
**6CO₂ + 6H₂O + light → C₆H₁₂O₆ + 6O₂**

Plants use chlorophyll to turn light into chemical energy.

## 🧬 Genetics
- **DNA** stores genetic information
- **Genes** code for specific traits
- Traits pass from parents to offspring

## 🌍 Evolution and Ecology
- **Natural selection** favours traits that aid survival
- **Food chain:** producer → primary consumer → secondary consumer"#;

pub const GRAMMAR_BASICS: &str = r#"# 📖 **English Grammar: How Sentences Work**

## 🏗️ Sentence Structure
**Subject + Verb + Object**
- **She** reads **books**
- **They** play **cricket**

## 📝 Parts of Speech
- **Noun:** a person, place, thing or idea
- **Verb:** an action or state (run, is)
- **Adjective:** describes a noun (bright, tall)
- **Adverb:** modifies a verb, often ending in -ly

## ⏰ Tenses
- **Present:** I eat / I am eating / I have eaten
- **Past:** I ate / I was eating / I had eaten
- **Future:** I will eat / I will be eating / I will have eaten

## ❌ Common Mistakes
- **Subject-verb agreement:** "He goes", not "He go"
- **Articles:** "a/an" for any one thing, "the" for a specific one
- **Prepositions:** *in* months, *on* days, *at* times"#;

pub const LOGICAL_REASONING: &str = r#"# 🧠 **Logical Reasoning**

## 🔍 Types of Reasoning
- **Deductive:** general rule → specific conclusion
- **Inductive:** specific observations → general pattern
- **Abductive:** the most likely explanation for what you see

## 🧩 Syllogisms
- **Major premise:** all A are B
- **Minor premise:** C is A
- **Conclusion:** C is B

## ⚠️ Fallacies to Avoid
- **Ad hominem:** attacking the person, not the argument
- **Straw man:** misrepresenting the other position
- **False dilemma:** pretending only two options exist
- **Hasty generalisation:** concluding from too few cases

## 🎯 A Problem-Solving Loop
1. Identify the problem
2. Define possible solutions
3. Examine the alternatives
4. Act on the best one
5. Look back and learn"#;

pub const MATH_GENERIC: &str = r#"# 🧮 **Mathematics Solution Guide**

## 🎯 Approach
1. **Understand:** what is given and what must be found
2. **Plan:** choose the formula or method
3. **Execute:** calculate step by step
4. **Verify:** check that the answer makes sense

## 💡 Tips
- Always check units
- Estimate first, then compare with your result
- Solve a second way to confirm

Related areas: Algebra, Geometry, Calculus, Statistics.

**Share the exact problem and I'll walk through the full solution.**"#;

pub const SCIENCE_GENERIC: &str = r#"# 🔬 **Science Explanation**

## 🌟 The Scientific Method
- **Observation:** notice details and patterns
- **Hypothesis:** make a testable prediction
- **Experiment:** control variables and collect data
- **Analysis:** draw conclusions from the results

## 📱 Science in Daily Life
- **Cooking:** chemical reactions
- **Weather:** physics of pressure and heat
- **Medicine:** biology and chemistry

**What specific science question do you have? I'll explain it in detail.**"#;

pub const ENGLISH_GENERIC: &str = r#"# 📚 **English Language Help**

## 🎯 Focus Areas
- **Grammar:** sentence structure, tenses, parts of speech
- **Vocabulary:** new words in context, synonyms and antonyms
- **Communication:** speaking, writing, listening, reading

## 💡 Daily Practice
- Read English for 15 minutes
- Keep a notebook of new words
- Practise speaking with friends or family

**Is your doubt about grammar, vocabulary or writing?**"#;

pub const REASONING_GENERIC: &str = r#"# 🧠 **Logical Reasoning Guide**

## 🎯 Critical Thinking
- Ask **why** something is true and **how** it works
- Separate **facts** from **opinions**
- Recognise **bias**, including your own

## 🔍 Problem-Solving Framework
1. Define the problem and its assumptions
2. Gather relevant information
3. Generate options
4. Weigh pros and cons
5. Implement and review

**Is your question about puzzles, critical thinking or decision making?**"#;

pub const GENERAL_GENERIC: &str = r#"# 🌟 **General Knowledge Response**

I'm trying to understand your question. It's an interesting topic!

## 🔍 A Good Way to Explore It
- **Historical** context
- **Current** relevance
- **Practical** applications

## 💡 Questions Worth Asking
- Is the source reliable?
- What evidence supports it?
- What are the alternative viewpoints?

**Please make your question more specific so I can give a detailed, focused answer.**"#;

/// Subject-specific fallback for the three science tabs
pub fn science_subject_generic(name: &str, key_areas: &str) -> String {
    format!(
        "# 🔬 **{name} Expert Response**\n\n\
         You asked about {name}, a subject closely tied to everyday life.\n\n\
         ## 🎯 Key Areas\n\n{key_areas}\n\n\
         ## 🧪 Practical Learning\n\
         - **Observe** everyday phenomena scientifically\n\
         - **Question** the why and how\n\
         - **Experiment** safely\n\
         - **Connect** theory to applications\n\n\
         **Please describe your {name} question in more detail.**"
    )
}
